use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::response::ApiResponse;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Unable to decode notification: {0}")]
    Decode(String),

    #[error("Queue resolution failed: {0}")]
    QueueResolution(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Decode(_) => StatusCode::BAD_REQUEST,
            GatewayError::QueueResolution(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::<()>::error(self.to_string(), "Notification rejected".to_string());

        (status, Json(body)).into_response()
    }
}
