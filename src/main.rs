use eframe::egui;
use fullscreen_counter::gui::CounterApp;
use fullscreen_counter::logging;
use fullscreen_counter::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path)?;
    logging::init(settings.debug_logging, settings.log_file.clone());
    tracing::info!(path = %settings_path, "settings loaded");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Full Screen Counter")
            .with_inner_size([480.0, 460.0])
            .with_min_inner_size([420.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Full Screen Counter",
        native_options,
        Box::new(move |_cc| Box::new(CounterApp::new(settings))),
    )
    .map_err(|e| anyhow::anyhow!("counter window failed: {e}"))
}
