use eframe::egui;

use pixelfolio::gui::PortfolioApp;
use pixelfolio::logging;
use pixelfolio::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(settings.debug_logging);

    let (width, height) = settings.window_size.unwrap_or((480.0, 640.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "pixelfolio",
        native_options,
        Box::new(move |_cc| Box::new(PortfolioApp::new(settings))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run ui: {err}"))
}
