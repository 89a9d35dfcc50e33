// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use spot_viewer::{config::{options::AppOptions, state::GuiState}, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    dotenvy::dotenv().ok();
    log::init();

    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32])
            .with_title("Spot Viewer"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppOptions::from_env()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
