mod app;
mod app_dir;
mod assets;
mod camera;
mod preferences;
mod ui;

use eframe::egui;
use tracing::info;

use app::WayfarerApp;
use preferences::AppPreferences;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Wayfarer");

    let prefs = AppPreferences::load();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Wayfarer")
        .with_inner_size([prefs.window_width, prefs.window_height]);
    if let Some(icon) = app::load_window_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Wayfarer",
        options,
        Box::new(move |cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            Ok(Box::new(WayfarerApp::new(prefs)))
        }),
    )
}
