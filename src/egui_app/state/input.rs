/// UI state for the comment text box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current text box contents.
    pub text: String,
    /// Characters in `text`, refreshed on every edit.
    pub char_count: usize,
    /// Whether to focus the text box on the next frame.
    pub focus_requested: bool,
    /// Whether to scroll the text box into view on the next frame.
    pub scroll_requested: bool,
}

impl InputState {
    /// Counter text shown under the text box.
    pub fn char_count_label(&self) -> String {
        self.char_count.to_string()
    }
}
