use std::sync::Arc;

use journey_core::catalog::AiTool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The server is
/// stateless beyond configuration and the read-only tool catalog: every
/// request carries the project collections it wants evaluated.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The builtin tool catalog, loaded once at startup.
    pub catalog: Arc<Vec<AiTool>>,
}
