// Application state module
// Immutable per-process state shared by every connection of the file server

use std::path::PathBuf;

use super::types::{Config, PerformanceConfig};
use crate::http::mime::ContentTypes;

/// Server state, built once at startup
pub struct AppState {
    /// Directory requests are resolved against
    pub root: PathBuf,
    pub index_files: Vec<String>,
    pub content_types: ContentTypes,
    pub access_log: bool,
    pub access_log_format: String,
    pub performance: PerformanceConfig,
}

impl AppState {
    /// Create state serving `root`.
    ///
    /// `root` is passed separately because the binary changes into the
    /// configured directory first and then serves `.`.
    pub fn new(config: &Config, root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_files: config.server.index_files.clone(),
            content_types: ContentTypes::with_overrides(&config.server.content_types),
            access_log: config.logging.access_log,
            access_log_format: config.logging.access_log_format.clone(),
            performance: config.performance.clone(),
        }
    }
}
