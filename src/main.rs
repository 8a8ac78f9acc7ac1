#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod extractor;
mod fetcher;
mod pipeline;
mod request;
mod transcoder;

use app::DownloaderApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    // Same fixed geometry as the original form.
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 300.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Bayan Downloader",
        options,
        Box::new(|_cc| Ok(Box::new(DownloaderApp::default()))),
    )
}
