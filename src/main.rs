//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against the AI or another player.
//!
//! Usage: `gomoku [config.toml]` (defaults to `gomoku.toml`). Set `RUST_LOG`
//! to see engine output, e.g. `RUST_LOG=gomoku=debug`.

use std::path::PathBuf;
use std::process::ExitCode;

use gomoku::ui::GomokuApp;
use gomoku::GameConfig;

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gomoku.toml"));

    let config = match GameConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("engine depth {}, opening cap {}", config.engine.max_depth, config.engine.fallback_cap);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 780.0])
            .with_min_inner_size([800.0, 620.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    match eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("window error: {e}");
            ExitCode::FAILURE
        }
    }
}
