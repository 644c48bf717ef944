//! Handlers for account sign-up and sign-in.

use adboard_core::account::Credentials;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /signup
// ---------------------------------------------------------------------------

/// Create a new account from a name/password pair.
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(creds): ValidatedJson<Credentials>,
) -> AppResult<impl IntoResponse> {
    let account = state
        .service
        .create_account(&creds.name, &creds.password)
        .await?;
    Ok((StatusCode::CREATED, Json(account)))
}

// ---------------------------------------------------------------------------
// POST /signin
// ---------------------------------------------------------------------------

/// Exchange a name/password pair for a session token.
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(creds): ValidatedJson<Credentials>,
) -> AppResult<impl IntoResponse> {
    let session = state.service.sign_in(&creds.name, &creds.password).await?;
    Ok((StatusCode::CREATED, Json(session)))
}
