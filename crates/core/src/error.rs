#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Sign-in failed. Deliberately does not say whether the account exists
    /// or the password was wrong.
    #[error("wrong name or password")]
    WrongCredentials,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
