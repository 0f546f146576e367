use reveal_explorer::gui::RevealApp;
use reveal_explorer::logging;
use reveal_explorer::settings::{FileConfig, Settings};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let config = FileConfig::at_default_location();
    let settings = Settings::load(config.path())?;
    logging::init(settings.debug_logging);

    // An optional path argument pre-fills the target field, so the tool can
    // be invoked from scripts or file-manager "open with" entries.
    let initial_target = std::env::args().nth(1);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 160.0])
            .with_min_inner_size([360.0, 120.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reveal in Custom Explorer",
        native_options,
        Box::new(move |_cc| Box::new(RevealApp::new(config, initial_target))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))?;

    Ok(())
}
