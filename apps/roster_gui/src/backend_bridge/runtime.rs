//! Runtime bridge between the UI command queue and the roster fetch worker.

use std::thread;

use client_core::{roster, RosterClient};
use crossbeam_channel::{Receiver, Sender};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

/// Spawns the backend worker: one tokio runtime and one serial command loop,
/// so at most a single fetch is ever in flight.
pub fn launch(api_url: Url, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::startup(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                ))));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = RosterClient::new(api_url);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadRoster { request_id } => {
                        match client.fetch_employees().await {
                            Ok(employees) => {
                                let roster = roster::over_age_threshold(employees);
                                tracing::info!(
                                    request_id,
                                    employees = roster.len(),
                                    "roster: fetch completed"
                                );
                                let _ = ui_tx.try_send(UiEvent::RosterLoaded {
                                    request_id,
                                    employees: roster,
                                });
                            }
                            Err(err) => {
                                tracing::warn!(request_id, "roster: fetch failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::RosterLoadFailed {
                                    request_id,
                                    error: UiError::from_fetch(&err),
                                });
                            }
                        }
                    }
                }
            }
        });
    });
}
