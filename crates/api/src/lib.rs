//! HTTP server exposing a single success endpoint.
//!
//! `GET /` logs one line and answers `200 {"success":true}`. `HEAD /` runs the
//! same handler with the body stripped. Every other request falls through to
//! axum's default handling (404/405).

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use config::Config;
pub use error::{Result, ServerError};
pub use routes::root::SuccessResponse;

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::get))
        .layer(TraceLayer::new_for_http())
}

/// Installs the global tracing subscriber described by `config`.
///
/// Panics if a global subscriber is already set.
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Serves `app` on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Binds the configured address and serves the application on it.
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    match listener.local_addr() {
        Ok(local) => tracing::info!(addr = %local, "starting server"),
        Err(_) => tracing::info!(%addr, "starting server"),
    }

    serve(listener, create_app()).await
}
