//! Success endpoint.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

/// GET / — logs the hit and returns `{"success":true}`.
pub async fn get() -> (StatusCode, Json<SuccessResponse>) {
    tracing::info!("get request route.");
    (StatusCode::OK, Json(SuccessResponse::OK))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let body = serde_json::to_string(&SuccessResponse::OK).unwrap();
        assert_eq!(body, r#"{"success":true}"#);
    }

    #[tokio::test]
    async fn test_handler_returns_ok() {
        let (status, Json(body)) = get().await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
    }
}
