//! Gomoku GUI
//!
//! Play freestyle Gomoku against the greedy AI or another player.

use env_logger::Env;
use gomoku::ui::GomokuApp;
use gomoku::AppConfig;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = AppConfig::default_path();
    let config = match AppConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("failed to load config '{}': {e}; using defaults", path.display());
            AppConfig::default()
        }
    };
    log::debug!("config: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
}
