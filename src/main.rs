#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the Toxiscope comment analyzer window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use toxiscope::config;
use toxiscope::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use toxiscope::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_or_default();
    if let Err(err) = &settings {
        tracing::error!("Failed to load config: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(760.0, 820.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Toxiscope",
        native_options,
        Box::new(move |_cc| Ok(create_app(settings))),
    )?;
    Ok(())
}

fn create_app(settings: Result<config::AppSettings, config::ConfigError>) -> Box<dyn eframe::App> {
    match settings {
        Ok(settings) => Box::new(EguiApp::new(settings)),
        Err(err) => Box::new(LaunchError {
            message: format!("Failed to load config: {err}"),
        }),
    }
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
