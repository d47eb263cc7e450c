//! Network layer - HTTP execution against the number service
//!
//! The Network actor receives fetch commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::FetchError;
