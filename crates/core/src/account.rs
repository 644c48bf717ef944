use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// Public view of an account, echoed back from sign-up.
///
/// The password digest lives only in the store layer and is never part of a
/// response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: DbId,
    pub name: String,
}

/// Response body of a successful sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct SessionToken {
    pub token: String,
}

/// Sign-up / sign-in payload.
///
/// The same shape and constraints apply to both endpoints: names double as
/// the lookup key, so they share the password length rule.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 8, max = 16, message = "name must be 8 to 16 characters"))]
    pub name: String,

    #[validate(length(min = 8, max = 16, message = "password must be 8 to 16 characters"))]
    pub password: String,
}
