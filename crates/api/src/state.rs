use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::Classifieds;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Business-logic facade the handlers call into.
    pub service: Arc<dyn Classifieds>,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
}
