use super::*;

/// Canned comments behind the sample buttons, as (label, text).
pub const SAMPLE_COMMENTS: [(&str, &str); 4] = [
    ("Friendly", "This is a wonderful article! Thanks for sharing your research."),
    ("Critical", "I disagree with your conclusion, the data doesn't support it."),
    ("Rude", "You are completely stupid and nobody wants to read this."),
    ("Hostile", "Shut up, you worthless idiot. People like you make me sick."),
];

impl AnalysisController {
    /// Replace the text box contents, as typing or pasting would.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.ui.input.text = text.into();
        self.input_changed();
    }

    /// Refresh derived input state after the text box was edited in place.
    pub fn input_changed(&mut self) {
        self.ui.input.char_count = self.ui.input.text.chars().count();
    }

    /// Fill the text box with a sample comment and focus it.
    pub fn load_sample(&mut self, index: usize) {
        let Some(&(_, text)) = SAMPLE_COMMENTS.get(index) else {
            return;
        };
        self.set_input_text(text);
        self.ui.input.focus_requested = true;
    }

    /// Clear input, panels and the stored result, then return focus to the text box.
    pub fn reset_form(&mut self) {
        self.ui.input.text.clear();
        self.ui.input.char_count = 0;
        self.hide_results();
        self.hide_error();
        self.current_result = None;
        self.ui.input.focus_requested = true;
        self.ui.input.scroll_requested = true;
        self.ui.status = StatusBarState::idle();
    }
}
