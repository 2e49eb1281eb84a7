mod app;
mod config;
mod data;
mod format;
mod state;
mod ui;

use app::IncomePandaApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Income Statement Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(IncomePandaApp::new(cc, config)))),
    )
}
