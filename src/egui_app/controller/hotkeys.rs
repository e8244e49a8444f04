use egui::{Key, Modifiers};

/// Keyboard gesture used to trigger an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotkeyGesture {
    pub key: Key,
    pub command: bool,
}

impl HotkeyGesture {
    pub const fn with_command(key: Key) -> Self {
        Self { key, command: true }
    }

    pub fn modifiers(self) -> Modifiers {
        Modifiers {
            command: self.command,
            ..Modifiers::NONE
        }
    }

    /// Consume a matching key press so widgets below do not see it.
    ///
    /// Ctrl is accepted in place of the command key, so Ctrl+Enter also works
    /// on macOS.
    pub fn consume(self, input: &mut egui::InputState) -> bool {
        input.consume_key(self.modifiers(), self.key)
            || (self.command && input.consume_key(Modifiers::CTRL, self.key))
    }
}

/// Ctrl/Cmd+Enter inside the comment box runs an analysis.
pub const ANALYZE: HotkeyGesture = HotkeyGesture::with_command(Key::Enter);
