//! Panel Swiper main entry point

use swipe_core::SwiperConfig;
use swipe_frontend::PanelSwiperApp;

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swipe_frontend=debug,swipe_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Panel Swiper");

    let config = load_config(std::env::args().nth(1));
    let app = PanelSwiperApp::new(config).map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 360.0])
            .with_title("Panel Swiper"),
        ..Default::default()
    };

    eframe::run_native(
        "Panel Swiper",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

/// Load the swiper layout from an optional RON file, falling back to defaults
fn load_config(path: Option<String>) -> SwiperConfig {
    let Some(path) = path else {
        return SwiperConfig::default();
    };

    match SwiperConfig::load(&path) {
        Ok(config) => {
            tracing::info!("Loaded {} panels from {}", config.anchors.len(), path);
            config
        }
        Err(e) => {
            tracing::error!("Failed to load config {}: {}", path, e);
            SwiperConfig::default()
        }
    }
}
