//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Fetch once on startup
        self.refresh();
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    tracing::info!(state = self.state.request.as_str(), "Request state changed");
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn refresh(&mut self) {
        if let Some(cmd) = self.state.refresh() {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Refresh => self.refresh(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NumberSet, RequestState};

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_actor() -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(AppState::default(), net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        Harness {
            ui_tx,
            net_resp_tx,
            net_cmd_rx,
            render_rx,
            handle,
        }
    }

    #[tokio::test]
    async fn test_fetches_on_startup() {
        let mut h = spawn_actor();

        let cmd = h.net_cmd_rx.recv().await.unwrap();
        assert!(matches!(cmd, NetworkCommand::FetchNumbers { id: 1, .. }));

        let first = h.render_rx.recv().await.unwrap();
        assert_eq!(first.request, RequestState::Loading);
        assert!(!first.button_enabled());
    }

    #[tokio::test]
    async fn test_refresh_mid_flight_has_no_effect() {
        let mut h = spawn_actor();
        h.net_cmd_rx.recv().await.unwrap();
        h.render_rx.recv().await.unwrap();

        h.ui_tx.send(UiEvent::Refresh).unwrap();
        let after_click = h.render_rx.recv().await.unwrap();
        assert_eq!(after_click.request, RequestState::Loading);
        assert!(h.net_cmd_rx.try_recv().is_err());

        h.net_resp_tx
            .send(NetworkResponse::Numbers {
                id: 1,
                numbers: NumberSet::new(vec![1, 2, 3, 4, 5], vec![6, 7]),
                time_ms: 1,
            })
            .unwrap();
        let done = h.render_rx.recv().await.unwrap();
        assert_eq!(
            done.request.numbers(),
            Some(&NumberSet::new(vec![1, 2, 3, 4, 5], vec![6, 7]))
        );
        assert_eq!(done.button_label(), "Generate New Numbers");

        h.ui_tx.send(UiEvent::Refresh).unwrap();
        let cmd = h.net_cmd_rx.recv().await.unwrap();
        assert!(matches!(cmd, NetworkCommand::FetchNumbers { id: 2, .. }));
    }

    #[tokio::test]
    async fn test_quit_shuts_down_network() {
        let mut h = spawn_actor();
        h.net_cmd_rx.recv().await.unwrap();

        h.ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(h.net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
        h.handle.await.unwrap();
    }
}
