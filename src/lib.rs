//! Desktop client for a comment toxicity prediction service.
/// Per-user application directories.
pub mod app_dirs;
/// Persistent settings stored as TOML.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// JSON export of analysis results.
pub mod export;
pub(crate) mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// HTML fragments for analysis results.
pub mod markup;
/// Display rules for analysis results.
pub mod presentation;
/// Client for the prediction service.
pub mod service;
