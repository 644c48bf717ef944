//! HTTP request handlers, grouped by resource.

pub mod accounts;
pub mod ads;
pub mod health;
