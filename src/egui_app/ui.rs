//! egui renderer for the comment analyzer window.

mod error_banner;
mod input_panel;
mod results_panel;
mod status_bar;
pub mod style;

use crate::config::AppSettings;
use crate::egui_app::controller::AnalysisController;
use eframe::egui::{self, Frame, Margin, RichText};
use std::time::Instant;

/// Minimum window size for the layout to stay readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(560.0, 520.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: AnalysisController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app for the configured prediction service and run startup work.
    pub fn new(settings: AppSettings) -> Self {
        let mut controller = AnalysisController::with_http_service(settings);
        controller.start();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Toxic Comment Classifier").heading().strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(self.controller.service_base_url())
                                .color(palette.text_muted)
                                .small(),
                        );
                    });
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick();
        self.render_header(ctx);
        self.render_error_banner(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_input_panel(ui);
                    ui.add_space(16.0);
                    self.render_results_panel(ui);
                });
        });
        if let Some(wait) = self.controller.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
