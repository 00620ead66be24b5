use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;

use crate::response::ErrorBody;

/// Failure of a product service call, as seen at the HTTP boundary.
///
/// Every variant renders as an [`ErrorBody`] through [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain failure raised by validation or a missing row.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog store rejected or failed a statement.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body is not a well-formed call (bad JSON, unknown
    /// operation, missing parameter).
    #[error("Invalid call: {0}")]
    InvalidCall(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidCall(rejection.body_text())
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Status, stable error code and caller-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            Self::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            Self::InvalidCall(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            Self::Database(err) => store_failure(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        (status, axum::Json(ErrorBody { error, code })).into_response()
    }
}

/// Map a store error onto the response.
///
/// Values the application validation missed but the table constraints
/// caught are still the caller's fault:
///
/// - `23514` check_violation (blank text, negative price) -> 400
/// - `22001` string_data_right_truncation (over-long text) -> 400
/// - `22003` numeric_value_out_of_range (oversized price) -> 400
///
/// Anything else is logged and answered with a sanitized 500.
fn store_failure(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::Database(db_err) = err {
        match db_err.code().as_deref() {
            Some("23514") => {
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!(
                        "Value violates check constraint: {}",
                        db_err.constraint().unwrap_or("unknown")
                    ),
                );
            }
            Some("22001") => {
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Value too long for column".to_string(),
                );
            }
            Some("22003") => {
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Numeric value out of range for column".to_string(),
                );
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Catalog store error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}
