//! App state - pure data structure with no I/O logic

use crate::config::Config;
use crate::messages::RenderState;
use crate::models::RequestState;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Fetch
    pub request: RequestState,
    pub endpoint: String,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            request: RequestState::Idle,
            endpoint: config.endpoint(),
            next_request_id: 1,
            pending_request_id: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            request: self.request.clone(),
            endpoint: self.endpoint.clone(),
            show_help: self.show_help,
        }
    }
}
