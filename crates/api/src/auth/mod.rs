//! Credential digesting and session-token handling.

pub mod jwt;
pub mod password;
