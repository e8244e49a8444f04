use crate::service::{
    AnalysisRequest, AnalysisResponse, PredictionService, ServiceError, ServiceStats,
};
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    AnalysisFinished(AnalysisResult),
    HealthChecked(HealthCheckResult),
}

#[derive(Debug)]
pub(crate) struct AnalysisResult {
    pub(crate) result: Result<AnalysisResponse, ServiceError>,
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) result: Result<ServiceStats, ServiceError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    analysis_in_progress: bool,
    health_check_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            analysis_in_progress: false,
            health_check_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn analysis_in_progress(&self) -> bool {
        self.analysis_in_progress
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    pub(super) fn any_in_progress(&self) -> bool {
        self.analysis_in_progress || self.health_check_in_progress
    }

    pub(super) fn begin_analysis(
        &mut self,
        service: Arc<dyn PredictionService>,
        request: AnalysisRequest,
    ) {
        if self.analysis_in_progress {
            return;
        }
        self.analysis_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service.predict(&request);
            let _ = tx.send(JobMessage::AnalysisFinished(AnalysisResult { result }));
        });
    }

    pub(super) fn clear_analysis(&mut self) {
        self.analysis_in_progress = false;
    }

    pub(super) fn begin_health_check(&mut self, service: Arc<dyn PredictionService>) {
        if self.health_check_in_progress {
            return;
        }
        self.health_check_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service.stats();
            let _ = tx.send(JobMessage::HealthChecked(HealthCheckResult { result }));
        });
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}
