use adboard_core::types::DbId;
use sqlx::FromRow;

/// Credential row fetched for sign-in.
///
/// Contains the password digest -- NEVER serialize this to API responses.
/// The external-facing view is [`adboard_core::account::Account`].
#[derive(Debug, Clone, FromRow)]
pub struct AccountAuth {
    pub id: DbId,
    pub password_digest: String,
}
