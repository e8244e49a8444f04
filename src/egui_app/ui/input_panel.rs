use super::style;
use super::*;
use crate::egui_app::controller::{SAMPLE_COMMENTS, hotkeys};

const COMMENT_EDIT_ID: &str = "comment_input";

#[derive(Default)]
struct InputActions {
    analyze: bool,
    reset: bool,
    export: bool,
    sample: Option<usize>,
}

impl EguiApp {
    pub(super) fn render_input_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let edit_id = egui::Id::new(COMMENT_EDIT_ID);
        let mut actions = InputActions::default();

        // Ctrl+Enter must be taken before the text edit inserts a newline.
        let had_focus = ui.memory(|mem| mem.has_focus(edit_id));
        if had_focus && ui.input_mut(|input| hotkeys::ANALYZE.consume(input)) {
            actions.analyze = true;
        }

        Frame::group(ui.style())
            .stroke(style::panel_stroke())
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.label(RichText::new("Enter a comment to analyze").strong());
                ui.add_space(6.0);
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.controller.ui.input.text)
                        .id(edit_id)
                        .hint_text("Type or paste a comment here…")
                        .desired_width(f32::INFINITY)
                        .desired_rows(6),
                );
                if response.changed() {
                    self.controller.input_changed();
                }
                if self.controller.ui.input.focus_requested && !response.has_focus() {
                    response.request_focus();
                }
                self.controller.ui.input.focus_requested = false;
                if self.controller.ui.input.scroll_requested {
                    response.scroll_to_me(Some(egui::Align::TOP));
                    self.controller.ui.input.scroll_requested = false;
                }

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} characters",
                            self.controller.ui.input.char_count_label()
                        ))
                        .color(palette.text_muted)
                        .small(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new("Ctrl+Enter to analyze")
                                .color(palette.text_muted)
                                .small(),
                        );
                    });
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let analysis = &self.controller.ui.analysis;
                    let label = if analysis.busy { "Analyzing…" } else { "Analyze" };
                    if ui
                        .add_enabled(
                            analysis.analyze_enabled,
                            egui::Button::new(RichText::new(label).strong())
                                .fill(palette.accent),
                        )
                        .clicked()
                    {
                        actions.analyze = true;
                    }
                    if analysis.busy {
                        ui.add(egui::Spinner::new().size(16.0));
                    }
                    if ui.button("Clear").clicked() {
                        actions.reset = true;
                    }
                    if ui.button("Export JSON").clicked() {
                        actions.export = true;
                    }
                });
                ui.add_space(8.0);

                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("Try a sample:").color(palette.text_muted));
                    for (index, (label, text)) in SAMPLE_COMMENTS.iter().enumerate() {
                        if ui.small_button(*label).on_hover_text(*text).clicked() {
                            actions.sample = Some(index);
                        }
                    }
                });
            });

        if let Some(index) = actions.sample {
            self.controller.load_sample(index);
        }
        if actions.reset {
            self.controller.reset_form();
        }
        if actions.analyze {
            self.controller.analyze_comment();
        }
        if actions.export {
            self.controller.export_results();
        }
    }
}
