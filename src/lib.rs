//! Library exports for reuse in benchmarks and tests.
/// Per-user directories for config and logs.
pub mod app_dirs;
/// Persisted interaction settings.
pub mod config;
/// Contact roster and balance card data.
pub mod contacts;
/// Shared egui UI modules.
pub mod egui_app;
/// File and console tracing setup.
pub mod logging;
