//! HTTP protocol layer module
//!
//! Content types, cache validators and response builders, independent of how
//! requests are mapped onto the file system.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use mime::ContentTypes;
pub use response::{
    build_301_response, build_304_response, build_404_response, build_501_response,
    build_file_response, build_html_response, FileHeaders,
};
