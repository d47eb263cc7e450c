//! Network actor - runs fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_fetch};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        Self::with_client(create_client(), response_tx)
    }

    pub fn with_client(
        client: reqwest::Client,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchNumbers { id, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching lottery numbers");
                                let result = execute_fetch(&client, &url, id).await;
                                tracing::info!(id, time_ms = result.time_ms(), "Fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Reap completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
