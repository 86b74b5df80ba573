//! Logger module
//!
//! Startup banners, access logging, and warning/error lines for both
//! binaries. Before `init()` everything goes to stdout/stderr.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::{IpAddr, SocketAddr};

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Announce the listener: the bind address and, if known, the LAN address
pub fn log_server_start(addr: &SocketAddr, lan: Option<IpAddr>) {
    write_info(&format!("Server running at http://{addr}/"));
    if let Some(ip) = lan {
        write_info(&format!(
            "Access from LAN: http://{}/",
            SocketAddr::new(ip, addr.port())
        ));
    }
}

pub fn log_serving_directory(root: &std::path::Path) {
    write_info(&format!("Serving files from: {}", root.display()));
}

pub fn log_shutdown() {
    write_info("Shutdown signal received, no longer accepting connections");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
