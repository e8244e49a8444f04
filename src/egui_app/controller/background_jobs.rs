use super::jobs::JobMessage;
use super::*;

impl AnalysisController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::AnalysisFinished(message) => {
                    self.jobs.clear_analysis();
                    self.finish_analysis(message.result);
                }
                JobMessage::HealthChecked(message) => {
                    self.jobs.clear_health_check();
                    self.apply_health_check(message.result);
                }
            }
        }
    }
}
