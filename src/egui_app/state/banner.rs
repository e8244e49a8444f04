use std::time::Instant;

/// Error banner shown above the main panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBannerState {
    /// Message of the most recent error.
    pub text: String,
    /// Whether the banner is shown.
    pub visible: bool,
    /// Auto-hide deadlines, one per shown error. Never cancelled.
    pub pending_hides: Vec<Instant>,
}
