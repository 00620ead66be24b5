//! JSON bodies returned by the product service.
//!
//! A successful call answers `{ "data": ... }` ([`DataResponse`]); a failed
//! one answers `{ "error": ..., "code": ... }` ([`ErrorBody`]).

use serde::Serialize;

/// Success envelope. Void operations carry `"data": null`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Failure body produced by [`crate::error::AppError`].
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message, safe to show to callers.
    pub error: String,
    /// Stable machine-readable code, e.g. `NOT_FOUND`.
    pub code: &'static str,
}
