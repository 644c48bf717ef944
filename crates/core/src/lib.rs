//! Adboard domain types and pure logic.
//!
//! Everything in this crate is I/O-free: wire DTOs with their validation
//! rules, the feed query descriptor with its defaulting logic, and the
//! domain error taxonomy. The `db` and `api` crates build on these.

pub mod account;
pub mod ad;
pub mod error;
pub mod feed;
pub mod types;
