#![warn(clippy::all, rust_2018_idioms)]

use dot_paint::{PaintApp, PaintConfig};

fn load_config() -> PaintConfig {
    let Some(path) = std::env::args().nth(1) else {
        return PaintConfig::default();
    };

    match PaintConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Could not load {}: {}; using default settings", path, err);
            PaintConfig::default()
        }
    }
}

fn main() -> eframe::Result {
    dot_paint::logging::init_logging();

    let config = load_config();
    log::info!("Starting {} ({}x{} canvas)", config.title, config.canvas_width, config.canvas_height);

    // Leave room for the two button columns around the canvas
    let window_size = [config.canvas_width as f32 + 220.0, config.canvas_height as f32 + 20.0];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)))),
    )
}
