mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::DEFAULT_API_URL;
use crossbeam_channel::bounded;
use url::Url;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{app::roster_heading, RosterApp};

#[derive(Parser, Debug)]
#[command(about = "Desktop viewer for the employee roster")]
struct Args {
    /// Employees endpoint to fetch the roster from.
    #[arg(long, env = "EMPLOYEES_API_URL", default_value = DEFAULT_API_URL)]
    api_url: Url,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    tracing::info!(api_url = %args.api_url, "roster: starting desktop viewer");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(args.api_url, cmd_rx, ui_tx);

    let title = roster_heading();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(RosterApp::new(cmd_tx, ui_rx)))),
    )
}
