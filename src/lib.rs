//! # EuroMillions TUI
//!
//! A terminal front-end for a remote EuroMillions number generator.
//!
//! ## Features
//! - Fetches a draw on startup and on demand
//! - Main numbers and lucky stars rendered as individual tokens
//! - Loading spinner and inline error reporting
//! - One outstanding request at a time
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use models::{Draw, NumberSet, RequestState};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{FetchError, NetworkActor};
