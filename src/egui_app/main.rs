/**
 * egui Native Desktop App - Main Entry Point
 */
use eframe::egui;
use vetdesk::egui_app::VetApp;

fn main() -> Result<(), eframe::Error> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "VetDesk",
        options,
        Box::new(|_cc| Ok(Box::new(VetApp::default()))),
    )
}
