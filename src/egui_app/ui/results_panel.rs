use super::style;
use super::*;
use crate::egui_app::view_model;
use crate::presentation::{CategoryBar, ResultView};
use eframe::egui::{CornerRadius, Sense, Stroke};

const BAR_HEIGHT: f32 = 10.0;

impl EguiApp {
    pub(super) fn render_results_panel(&mut self, ui: &mut egui::Ui) {
        let results = &mut self.controller.ui.results;
        if !results.visible {
            return;
        }
        let Some(view) = results.view.as_ref() else {
            return;
        };
        let response = Frame::group(ui.style())
            .stroke(style::panel_stroke())
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                render_overall(ui, view);
                ui.add_space(12.0);
                ui.label(RichText::new("Category Breakdown").strong());
                ui.add_space(6.0);
                for bar in &view.bars {
                    render_category(ui, bar);
                    ui.add_space(6.0);
                }
            })
            .response;
        if results.scroll_requested {
            response.scroll_to_me(Some(egui::Align::TOP));
            results.scroll_requested = false;
        }
    }
}

fn render_overall(ui: &mut egui::Ui, view: &ResultView) {
    let palette = style::palette();
    let accent = view_model::level_accent(view.profile);
    Frame::new()
        .fill(accent.gamma_multiply(0.18))
        .stroke(Stroke::new(1.0, accent))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(view.profile.icon).size(32.0));
                ui.label(
                    RichText::new(view.profile.title)
                        .heading()
                        .strong()
                        .color(accent),
                );
                ui.label(view.profile.description);
                ui.add_space(8.0);
                ui.label(RichText::new(&view.score_text).size(18.0).strong());
                if let Some(notice) = view.demo_notice {
                    ui.add_space(8.0);
                    ui.label(RichText::new(notice).small().color(palette.text_muted));
                }
            });
        });
}

fn render_category(ui: &mut egui::Ui, bar: &CategoryBar) {
    let palette = style::palette();
    let color = view_model::bar_color(bar.color, palette.accent);
    ui.horizontal(|ui| {
        ui.label(&bar.display_name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(&bar.percentage).strong().color(color));
        });
    });
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), Sense::hover());
    let painter = ui.painter();
    let radius = CornerRadius::same(5);
    painter.rect_filled(rect, radius, palette.track);
    if bar.fill_fraction > 0.0 {
        let mut fill = rect;
        fill.set_width(rect.width() * bar.fill_fraction);
        painter.rect_filled(fill, radius, color);
    }
}
