// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub inventory: InventoryConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Spreadsheet inventory configuration
#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Files to check, in report order. The first one is the load target.
    #[serde(default = "default_inventory_files")]
    pub files: Vec<FileEntry>,
    /// Number of rows shown in the table preview
    pub preview_rows: usize,
}

/// One configured spreadsheet: a logical name and where it lives
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Default inventory: the four database exports on the desktop
fn default_inventory_files() -> Vec<FileEntry> {
    let base = dirs::desktop_dir().unwrap_or_default().join("DB");
    ["Categories", "Products", "ProductItems", "Users"]
        .into_iter()
        .map(|name| FileEntry::new(name, base.join(format!("{name}.xlsx"))))
        .collect()
}

/// Static file server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as `/`; the process changes into it at startup
    pub root: PathBuf,
    /// Address advertised for access from other machines.
    /// Discovered from the default route when unset.
    #[serde(default)]
    pub lan_host: Option<String>,
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
    /// Extension (without dot) to Content-Type overrides
    #[serde(default = "default_content_types")]
    pub content_types: HashMap<String, String>,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string(), "index.htm".to_string()]
}

fn default_content_types() -> HashMap<String, String> {
    [
        ("js", "application/javascript"),
        ("css", "text/css"),
        ("html", "text/html"),
    ]
    .into_iter()
    .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
    .collect()
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (common, combined, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Per-connection performance settings
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    pub read_timeout: u64,
    pub write_timeout: u64,
}
