// Configuration module entry point
// Layers stockroom.toml, STOCKROOM_* environment variables and built-in defaults

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    Config, FileEntry, InventoryConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

/// Default configuration file name (without extension)
pub const DEFAULT_CONFIG_FILE: &str = "stockroom";

impl Config {
    /// Load configuration from `stockroom.toml` in the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional. Environment variables override it, using `__` to
    /// reach nested keys, e.g. `STOCKROOM_SERVER__PORT=9000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("STOCKROOM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("inventory.preview_rows", 5)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.root", "dist")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
