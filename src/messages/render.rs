//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::{BUTTON_BUSY_LABEL, BUTTON_IDLE_LABEL, DEFAULT_BASE_URL, NUMBERS_PATH};
use crate::models::RequestState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub request: RequestState,
    pub endpoint: String,
    pub show_help: bool,
}

impl RenderState {
    /// The refresh button is disabled while a fetch is outstanding
    pub fn button_enabled(&self) -> bool {
        !self.request.is_loading()
    }

    pub fn button_label(&self) -> &'static str {
        if self.request.is_loading() {
            BUTTON_BUSY_LABEL
        } else {
            BUTTON_IDLE_LABEL
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            request: RequestState::Idle,
            endpoint: format!("{}{}", DEFAULT_BASE_URL, NUMBERS_PATH),
            show_help: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_follows_loading() {
        let mut state = RenderState::default();
        assert!(state.button_enabled());
        assert_eq!(state.button_label(), "Generate New Numbers");

        state.request = RequestState::Loading;
        assert!(!state.button_enabled());
        assert_eq!(state.button_label(), "Fetching...");

        state.request = RequestState::Failed("nope".into());
        assert!(state.button_enabled());
    }
}
