use super::*;
use crate::app_dirs;
use crate::export::{self, ExportError};
use std::path::PathBuf;
use time::OffsetDateTime;

impl AnalysisController {
    /// Write the stored result as JSON into the export directory.
    ///
    /// Returns the written path. Every failure, including having nothing to
    /// export, is reported on the error banner.
    pub fn export_results(&mut self) -> Option<PathBuf> {
        self.export_results_at(OffsetDateTime::now_utc())
    }

    pub(crate) fn export_results_at(&mut self, now: OffsetDateTime) -> Option<PathBuf> {
        let Some(response) = self.current_result.as_ref() else {
            self.show_error(ExportError::NoResults.to_string());
            return None;
        };
        let dir = match self.export_dir() {
            Ok(dir) => dir,
            Err(err) => {
                tracing::error!("Export directory unavailable: {err}");
                self.show_error(err.to_string());
                return None;
            }
        };
        match export::write_export(&dir, response, now) {
            Ok(path) => {
                tracing::info!("Exported analysis to {}", path.display());
                self.set_status(format!("Exported to {}", path.display()), StatusTone::Info);
                Some(path)
            }
            Err(err) => {
                tracing::error!("Export failed: {err}");
                self.show_error(err.to_string());
                None
            }
        }
    }

    fn export_dir(&self) -> Result<PathBuf, app_dirs::AppDirError> {
        match &self.settings.export.directory {
            Some(dir) => Ok(dir.clone()),
            None => app_dirs::default_export_dir(),
        }
    }
}
