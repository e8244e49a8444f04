//! Writing the last analysis result to a timestamped JSON file.

use std::path::{Path, PathBuf};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

use crate::service::AnalysisResponse;

pub const EXPORT_FILE_PREFIX: &str = "toxic-analysis-";

/// Errors raised while exporting a result.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Nothing has been analyzed since launch or the last reset.
    #[error("No results to export.")]
    NoResults,
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to format export timestamp: {0}")]
    FormatTime(#[from] time::error::Format),
    #[error("Failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// `toxic-analysis-2026-10-17T12-34-56-789Z.json` for 2026-10-17T12:34:56.789Z.
pub fn export_file_name(now: OffsetDateTime) -> Result<String, ExportError> {
    const ISO_MILLIS: &[FormatItem<'_>] = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    let stamp = now.to_offset(UtcOffset::UTC).format(ISO_MILLIS)?;
    let stamp = stamp.replace(|c: char| c == ':' || c == '.', "-");
    Ok(format!("{EXPORT_FILE_PREFIX}{stamp}.json"))
}

/// Pretty-printed JSON with two-space indentation.
pub fn export_json(response: &AnalysisResponse) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(response)?)
}

/// Write `response` into `dir`, returning the created file path.
pub fn write_export(
    dir: &Path,
    response: &AnalysisResponse,
    now: OffsetDateTime,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(export_file_name(now)?);
    let json = export_json(response)?;
    std::fs::write(&path, json).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
