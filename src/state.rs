use crate::config::Config;
use crate::upstream::BackendClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub config: Arc<Config>,
}
