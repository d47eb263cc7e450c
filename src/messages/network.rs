//! Network messages - communication between App and Network layers

use crate::models::NumberSet;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch a fresh number set from the endpoint
    FetchNumbers {
        id: u64,
        url: String,
    },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// The endpoint answered 2xx with a well-formed payload
    Numbers {
        id: u64,
        numbers: NumberSet,
        time_ms: u64,
    },
    /// HTTP status or transport/parse failure
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Numbers { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Numbers { time_ms, .. } => *time_ms,
            NetworkResponse::Failed { time_ms, .. } => *time_ms,
        }
    }
}
