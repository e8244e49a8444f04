//! Controller that owns the analysis workflow and bridges it to the egui UI.
//!
//! The renderer mutates `ui` for plain edits and calls controller methods for
//! actions. Network work runs on background threads and comes back through
//! the job channel drained by [`AnalysisController::tick`].

use crate::config::AppSettings;
use crate::egui_app::state::*;
use crate::service::{AnalysisResponse, HttpPredictionService, PredictionService};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod analysis;
mod background_jobs;
mod banner;
mod export;
mod health;
pub mod hotkeys;
mod input;
mod jobs;

#[cfg(test)]
mod test_support;

pub use analysis::{EMPTY_INPUT_MESSAGE, failure_message};
pub use banner::ERROR_BANNER_DURATION;
pub use input::SAMPLE_COMMENTS;

/// Poll interval while a request is outstanding.
const JOB_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Maintains app state and bridges the prediction service to the egui UI.
pub struct AnalysisController {
    pub ui: UiState,
    settings: AppSettings,
    service: Arc<dyn PredictionService>,
    jobs: jobs::ControllerJobs,
    /// Last successful response, kept for export until reset.
    current_result: Option<AnalysisResponse>,
}

impl AnalysisController {
    pub fn new(settings: AppSettings, service: Arc<dyn PredictionService>) -> Self {
        Self {
            ui: UiState::default(),
            settings,
            service,
            jobs: jobs::ControllerJobs::new(),
            current_result: None,
        }
    }

    /// Controller talking to the service named in `settings`.
    pub fn with_http_service(settings: AppSettings) -> Self {
        let service = Arc::new(HttpPredictionService::new(&settings.service));
        Self::new(settings, service)
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn service_base_url(&self) -> &str {
        self.service.base_url()
    }

    pub fn current_result(&self) -> Option<&AnalysisResponse> {
        self.current_result.as_ref()
    }

    /// Launch-time work: optional health probe and initial focus.
    pub fn start(&mut self) {
        tracing::info!("Toxiscope controller initialized");
        if self.settings.startup.health_probe {
            self.begin_health_probe();
        }
        self.ui.input.focus_requested = true;
    }

    /// Drain finished jobs and expire banner timers. Call once per frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub(crate) fn tick_at(&mut self, now: Instant) {
        self.poll_background_jobs();
        self.expire_error_banner(now);
    }

    /// How soon the UI should repaint without user input, if at all.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let banner = self
            .ui
            .error
            .pending_hides
            .iter()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now));
        let jobs = self.jobs.any_in_progress().then_some(JOB_POLL_INTERVAL);
        match (banner, jobs) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }
}
