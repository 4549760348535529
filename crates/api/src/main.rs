//! Server entry point.

use status_api::Config;

#[tokio::main]
async fn main() {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    status_api::init_tracing(&config);

    // 2. Bind and serve
    if let Err(err) = status_api::run(&config).await {
        tracing::error!(error = %err, "server failed");
        std::process::exit(1);
    }
}
