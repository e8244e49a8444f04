use super::*;
use crate::service::{ServiceError, ServiceStats};

impl AnalysisController {
    /// Ask the service for its status in the background. Results are only logged.
    pub fn begin_health_probe(&mut self) {
        self.jobs.begin_health_check(Arc::clone(&self.service));
    }

    pub fn is_health_probe_pending(&self) -> bool {
        self.jobs.health_check_in_progress()
    }

    pub(in crate::egui_app::controller) fn apply_health_check(
        &mut self,
        result: Result<ServiceStats, ServiceError>,
    ) {
        match result {
            Ok(stats) => {
                if let Some(model_loaded) = stats.model_loaded {
                    tracing::info!("Backend API is online");
                    tracing::info!(model_loaded, "Model loaded: {model_loaded}");
                }
            }
            Err(err) => {
                tracing::warn!(
                    "Backend API is not available at {}: {err}. Make sure the prediction service is running.",
                    self.service.base_url()
                );
            }
        }
    }
}
