//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{Draw, RequestState};

impl AppState {
    // ========================
    // Fetch
    // ========================

    /// Start a fetch unless one is already outstanding.
    ///
    /// Returns the command to hand to the network layer, or `None` while loading.
    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        if self.request.is_loading() {
            tracing::debug!(pending = ?self.pending_request_id, "Refresh ignored, fetch in flight");
            return None;
        }

        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.request = RequestState::Loading;

        Some(NetworkCommand::FetchNumbers {
            id,
            url: self.endpoint.clone(),
        })
    }

    /// Apply a network response to the request state
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::warn!(id = response.id(), "Dropping response for stale request");
            return;
        }

        self.request = match response {
            NetworkResponse::Numbers { numbers, time_ms, .. } => RequestState::Success(Draw {
                numbers,
                fetched_at: chrono::Utc::now(),
                time_ms,
            }),
            NetworkResponse::Failed { message, .. } => RequestState::Failed(message),
        };
        self.pending_request_id = None;
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
