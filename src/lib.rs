//! stockroom: two small tools for the rental shop front end.
//!
//! - `sheet-check` reports on the spreadsheet exports the database is seeded
//!   from, and previews the first one.
//! - `dist-server` serves the built `dist/` directory over HTTP.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod inventory;
pub mod logger;
pub mod server;
