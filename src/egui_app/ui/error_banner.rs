use super::style;
use super::*;

impl EguiApp {
    pub(super) fn render_error_banner(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.error.visible {
            return;
        }
        let palette = style::palette();
        let mut dismiss = false;
        egui::TopBottomPanel::top("error_banner")
            .frame(
                Frame::new()
                    .fill(palette.error_fill)
                    .inner_margin(Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").strong());
                    ui.add(
                        egui::Label::new(
                            RichText::new(&self.controller.ui.error.text)
                                .color(egui::Color32::WHITE),
                        )
                        .wrap(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismiss = ui.button("Dismiss").clicked();
                    });
                });
            });
        if dismiss {
            self.controller.hide_error();
        }
    }
}
