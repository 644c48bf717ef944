//! JWT-based caller-identity extractors for Axum handlers.

use adboard_core::error::CoreError;
use adboard_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication; a missing header, a non-Bearer scheme, or a token that
/// fails verification rejects the request with 401 before the handler body
/// runs:
///
/// ```ignore
/// async fn my_handler(identity: Identity) -> AppResult<Json<()>> {
///     tracing::info!(account_id = identity.account_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    /// The caller's internal database id (from `claims.sub`).
    pub account_id: DbId,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let account_id = verify_token(token, &state.config.jwt)
            .map_err(|err| AppError::Core(CoreError::Unauthorized(err.to_string())))?;

        Ok(Identity { account_id })
    }
}

/// Caller identity for routes that serve signed-in and anonymous callers
/// alike.
///
/// Resolution is identical to [`Identity`]; every failure, from a missing
/// header to an expired token, just degrades to `None`.
#[derive(Debug, Clone, Copy)]
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequestParts<AppState> for OptionalIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(
            Identity::from_request_parts(parts, state).await.ok(),
        ))
    }
}
