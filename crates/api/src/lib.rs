//! Adboard API server library.
//!
//! Exposes the building blocks (config, state, error handling, service layer,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod state;
