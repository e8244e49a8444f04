/// Controller owning the analysis workflow.
pub mod controller;
/// UI state consumed by the renderer.
pub mod state;
/// egui renderer.
pub mod ui;
/// egui-facing conversions of presentation data.
pub mod view_model;
