use crate::presentation::ResultView;

/// Progress state of the analyze action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisUiState {
    /// True while a request is in flight; drives the spinner.
    pub busy: bool,
    /// Whether the Analyze button accepts clicks.
    pub analyze_enabled: bool,
}

impl Default for AnalysisUiState {
    fn default() -> Self {
        Self {
            busy: false,
            analyze_enabled: true,
        }
    }
}

/// Results panel contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsState {
    /// Whether the panel is shown.
    pub visible: bool,
    /// View built from the last successful response.
    pub view: Option<ResultView>,
    /// Whether to scroll the panel into view on the next frame.
    pub scroll_requested: bool,
}
