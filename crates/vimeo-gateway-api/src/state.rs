//! Application state shared by all handlers.

use std::sync::Arc;
use vimeo_gateway_client::VideoProvider;

#[derive(Clone)]
pub struct AppState {
    /// Video host behind the API; a fake in tests
    pub provider: Arc<dyn VideoProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn VideoProvider>) -> Self {
        Self { provider }
    }
}
