//! Route tree assembly.

use axum::routing::{get, post};
use axum::{middleware, Router};

use crate::handlers;
use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// /health          liveness probe (public)
/// /signup          create account (public)
/// /signin          exchange credentials for a session token (public)
/// /ads             POST: create ad (requires auth)
///                  GET:  public feed (auth optional, drives isYours)
/// ```
///
/// Authentication is enforced per handler through the [`Identity`] and
/// [`OptionalIdentity`] extractors. The body-logging layer wraps the whole
/// tree, so requests rejected by auth or validation are logged too.
///
/// [`Identity`]: crate::middleware::auth::Identity
/// [`OptionalIdentity`]: crate::middleware::auth::OptionalIdentity
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/signup", post(handlers::accounts::signup))
        .route("/signin", post(handlers::accounts::signin))
        .route(
            "/ads",
            post(handlers::ads::create_ad).get(handlers::ads::feed),
        )
        .layer(middleware::from_fn(crate::middleware::logging::log_request))
        .with_state(state)
}
