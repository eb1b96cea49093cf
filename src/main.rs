#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::Path;

use drawpad::CanvasConfig;
use drawpad::config::CONFIG_FILE_NAME;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::load_or_default(Path::new(CONFIG_FILE_NAME));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("DrawPad")
            .with_inner_size([1000.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DrawPad",
        native_options,
        Box::new(|cc| Ok(Box::new(drawpad::PaintApp::new(cc, config)))),
    )
}
