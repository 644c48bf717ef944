//! Caller-identity extractors and the request-logging layer.
//!
//! - [`auth::Identity`] -- extracts the authenticated caller from a JWT
//!   Bearer token, rejecting with 401.
//! - [`auth::OptionalIdentity`] -- same resolution path, but every failure
//!   degrades to anonymous.
//! - [`logging::log_request`] -- logs method, path, and a duplicated copy of
//!   the request body.

pub mod auth;
pub mod logging;
