//! Request logging with body duplication.

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;

/// Log every request's method, path, and body.
///
/// The body is buffered so it can be both logged and handed on intact to the
/// downstream extractors. Runs outermost, so rejected requests are logged
/// too.
pub async fn log_request(req: Request, next: Next) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();

    let bytes: Bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|err| AppError::Internal(format!("Failed to read request body: {err}")))?;

    tracing::info!(
        method = %parts.method,
        path = %parts.uri,
        body = %String::from_utf8_lossy(&bytes),
        "request"
    );

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}
