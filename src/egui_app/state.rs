//! Shared state types for the egui UI.

mod banner;
mod input;
mod results;
mod status;

pub use banner::ErrorBannerState;
pub use input::InputState;
pub use results::{AnalysisUiState, ResultsState};
pub use status::{StatusBarState, StatusTone};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Comment text box and its counters.
    pub input: InputState,
    /// Busy indicator and trigger availability.
    pub analysis: AnalysisUiState,
    /// Rendered result of the last successful analysis.
    pub results: ResultsState,
    /// Dismissible error banner.
    pub error: ErrorBannerState,
    /// Footer status line.
    pub status: StatusBarState,
}
