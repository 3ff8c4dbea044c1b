mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::UploaderSettings;
use crossbeam_channel::bounded;
use eframe::egui;
use shared::messages::Locale;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::UploaderApp;

const APP_NAME: &str = "Scenario Uploader";

#[derive(Parser, Debug)]
#[command(about = "Upload a leads CSV to the scenario webhook")]
struct Args {
    /// Interface language (`en` or `pl`).
    #[arg(long, default_value_t = Locale::English)]
    locale: Locale,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = match UploaderSettings::from_constants() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("webhook url is not valid: {err}");
            std::process::exit(2);
        }
    };
    let max_file_size = settings.max_file_size;
    tracing::info!(locale = %args.locale, endpoint = %settings.endpoint, "starting uploader");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([520.0, 720.0])
            .with_min_inner_size([400.0, 560.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(UploaderApp::new(
                cmd_tx,
                ui_rx,
                args.locale,
                max_file_size,
            )))
        }),
    )
}
