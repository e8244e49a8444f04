use super::*;
use crate::config::ExportSettings;
use crate::service::{AnalysisRequest, Predictions, ServiceError, ServiceStats};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Prediction service answering every call with canned results.
pub(super) struct StubService {
    predict: Result<AnalysisResponse, ServiceError>,
    stats: Result<ServiceStats, ServiceError>,
    pub(super) predict_calls: AtomicUsize,
    pub(super) stats_calls: AtomicUsize,
    pub(super) last_text: Mutex<Option<String>>,
}

impl StubService {
    /// Healthy service whose predictions come back as `predict`.
    pub(super) fn answering(predict: Result<AnalysisResponse, ServiceError>) -> Arc<Self> {
        Self::build(
            predict,
            Ok(ServiceStats {
                model_loaded: Some(true),
                ..ServiceStats::default()
            }),
        )
    }

    /// Service whose status endpoint fails with `error`.
    pub(super) fn with_failing_stats(error: ServiceError) -> Arc<Self> {
        Self::build(Err(error.clone()), Err(error))
    }

    fn build(
        predict: Result<AnalysisResponse, ServiceError>,
        stats: Result<ServiceStats, ServiceError>,
    ) -> Arc<Self> {
        Arc::new(Self {
            predict,
            stats,
            predict_calls: AtomicUsize::new(0),
            stats_calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        })
    }

    pub(super) fn calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub(super) fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }
}

impl PredictionService for StubService {
    fn predict(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ServiceError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(request.text.clone());
        self.predict.clone()
    }

    fn stats(&self) -> Result<ServiceStats, ServiceError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        self.stats.clone()
    }

    fn base_url(&self) -> &str {
        "http://127.0.0.1:5000"
    }
}

pub(super) fn response(level: &str, max_toxicity: f64) -> AnalysisResponse {
    AnalysisResponse {
        success: true,
        predictions: [
            ("toxic", max_toxicity),
            ("severe_toxic", max_toxicity / 4.0),
            ("insult", max_toxicity / 2.0),
        ]
        .into_iter()
        .collect::<Predictions>(),
        is_toxic: max_toxicity >= 0.5,
        max_toxicity,
        toxicity_level: level.to_string(),
        demo_mode: false,
        error: None,
        extra: Default::default(),
    }
}

pub(super) fn controller_with(service: Arc<StubService>) -> AnalysisController {
    let mut settings = AppSettings::default();
    settings.startup.health_probe = false;
    AnalysisController::new(settings, service)
}

pub(super) fn controller_exporting_to(
    service: Arc<StubService>,
    dir: PathBuf,
) -> AnalysisController {
    let mut controller = controller_with(service);
    controller.settings.export = ExportSettings {
        directory: Some(dir),
    };
    controller
}

/// Tick until no analysis is outstanding.
pub(super) fn wait_for_analysis(controller: &mut AnalysisController) {
    for _ in 0..400 {
        controller.tick();
        if !controller.is_analysis_pending() {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("analysis did not finish");
}

pub(super) fn wait_for_health_probe(controller: &mut AnalysisController) {
    for _ in 0..400 {
        controller.tick();
        if !controller.is_health_probe_pending() {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("health probe did not finish");
}
