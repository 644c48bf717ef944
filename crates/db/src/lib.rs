//! Postgres-backed store for Adboard.
//!
//! The [`Store`] trait is the only storage surface the service layer sees;
//! [`PgStore`] is the production implementation, and tests substitute an
//! in-memory one.

pub mod models;
pub mod pool;
pub mod store;

pub use pool::{create_pool, health_check, run_migrations, DbPool};
pub use store::{PgStore, Store, StoreError};
