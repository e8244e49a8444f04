use super::*;

/// How long an error stays up before its auto-hide fires.
pub const ERROR_BANNER_DURATION: Duration = Duration::from_secs(5);

impl AnalysisController {
    /// Show `message` on the error banner and schedule its auto-hide.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show_error_at(message, Instant::now());
    }

    pub(crate) fn show_error_at(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!("Showing error: {message}");
        self.ui.error.text = message;
        self.ui.error.visible = true;
        self.ui.error.pending_hides.push(now + ERROR_BANNER_DURATION);
    }

    /// Hide the banner. Pending auto-hides stay scheduled.
    pub fn hide_error(&mut self) {
        self.ui.error.visible = false;
    }

    /// Fire every auto-hide whose deadline has passed.
    ///
    /// Each shown error owns its own deadline, so an older deadline can hide a
    /// newer message.
    pub(in crate::egui_app::controller) fn expire_error_banner(&mut self, now: Instant) {
        let before = self.ui.error.pending_hides.len();
        self.ui.error.pending_hides.retain(|deadline| *deadline > now);
        if self.ui.error.pending_hides.len() != before {
            self.hide_error();
        }
    }
}
