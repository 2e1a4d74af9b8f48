use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::employee::errors::EmployeeError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": title, "detail": message, "code": numeric}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
    pub code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail, code: None }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail, "code": self.code});
        (self.status, Json(body)).into_response()
    }
}

impl From<EmployeeError> for JsonApiError {
    fn from(e: EmployeeError) -> Self {
        let (status, title) = match &e {
            EmployeeError::EmailTaken(_) => (StatusCode::CONFLICT, "Conflict"),
            EmployeeError::Repository(_) => {
                error!(err = %e, "employee store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        Self { status, error: title, detail: Some(e.to_string()), code: Some(e.code()) }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
