use super::*;
use crate::presentation::ResultView;
use crate::service::{AnalysisRequest, ServiceError};

/// Banner text for a submit with nothing but whitespace.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a comment to analyze.";

/// Banner text for a failed analysis.
pub fn failure_message(error: &ServiceError, base_url: &str) -> String {
    format!(
        "Failed to analyze comment: {error}. Make sure the backend server is running on {base_url}"
    )
}

impl AnalysisController {
    /// Validate the text box and send it to the service.
    ///
    /// Blank input reports an error without touching the network. Otherwise the
    /// panels are hidden, the spinner shown and the trigger disabled until the
    /// response is handled in [`Self::finish_analysis`].
    pub fn analyze_comment(&mut self) {
        if self.jobs.analysis_in_progress() {
            return;
        }
        let Some(request) = AnalysisRequest::from_input(&self.ui.input.text) else {
            self.show_error(EMPTY_INPUT_MESSAGE);
            return;
        };

        self.hide_results();
        self.hide_error();
        self.ui.analysis.busy = true;
        self.ui.analysis.analyze_enabled = false;
        self.set_status("Analyzing…", StatusTone::Busy);
        tracing::info!(chars = request.text.chars().count(), "Analyzing comment");
        self.jobs.begin_analysis(Arc::clone(&self.service), request);
    }

    /// Whether an analysis request is still outstanding.
    pub fn is_analysis_pending(&self) -> bool {
        self.jobs.analysis_in_progress()
    }

    pub(in crate::egui_app::controller) fn finish_analysis(
        &mut self,
        result: Result<AnalysisResponse, ServiceError>,
    ) {
        self.ui.analysis.busy = false;
        self.ui.analysis.analyze_enabled = true;
        match result {
            Ok(response) => {
                tracing::info!(
                    level = %response.toxicity_level,
                    max_toxicity = response.max_toxicity,
                    demo_mode = response.demo_mode,
                    "Analysis complete"
                );
                self.display_results(&response);
                self.current_result = Some(response);
                self.set_status("Analysis complete", StatusTone::Info);
            }
            Err(err) => {
                tracing::error!("Error analyzing comment: {err}");
                let message = failure_message(&err, self.service.base_url());
                self.show_error(message);
                self.set_status("Analysis failed", StatusTone::Error);
            }
        }
    }

    /// Replace the results panel with a fresh view of `response`.
    pub(in crate::egui_app::controller) fn display_results(&mut self, response: &AnalysisResponse) {
        self.ui.results.view = Some(ResultView::from_response(response));
        self.ui.results.visible = true;
        self.ui.results.scroll_requested = true;
    }

    /// Hide the results panel and drop the stored result with it.
    pub(in crate::egui_app::controller) fn hide_results(&mut self) {
        self.ui.results.visible = false;
        self.ui.results.view = None;
        self.ui.results.scroll_requested = false;
        self.current_result = None;
    }
}
