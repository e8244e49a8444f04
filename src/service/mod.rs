//! Client side of the toxicity prediction service.
//!
//! The service itself is remote and opaque: `POST /api/predict` scores a
//! comment, `GET /api/stats` reports whether a trained model is loaded.

mod http;
mod types;

pub use http::{HttpPredictionService, PREDICT_PATH, STATS_PATH};
pub use types::{AnalysisRequest, AnalysisResponse, Predictions, ServiceStats, ToxicityLevel};

/// Fallback reason when the service reports failure without an `error` string.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Failure modes of a service call.
///
/// `Display` yields the reason text that ends up in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Service answered with a non-success HTTP status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// Connection, DNS, TLS or timeout failure.
    #[error("{0}")]
    Transport(String),
    /// Body could not be read or was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),
    /// Service answered `success: false`.
    #[error("{0}")]
    Rejected(String),
}

/// Seam between the controller and the network.
pub trait PredictionService: Send + Sync {
    /// Score one comment.
    fn predict(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ServiceError>;

    /// Fetch service status for the startup probe.
    fn stats(&self) -> Result<ServiceStats, ServiceError>;

    /// Origin shown in failure hints.
    fn base_url(&self) -> &str;
}
