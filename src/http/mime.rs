//! MIME type detection module
//!
//! Resolves the Content-Type of a served file: configured overrides first,
//! then the built-in extension table.

use std::collections::HashMap;
use std::path::Path;

/// Fallback for unknown or missing extensions
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension to Content-Type table with per-deployment overrides
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    /// Build from an override map. Keys may be given with or without the
    /// leading dot and in any case.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let overrides = overrides
            .iter()
            .map(|(ext, mime)| (normalize_extension(ext), mime.clone()))
            .collect();
        Self { overrides }
    }

    /// Content-Type for a file path
    pub fn for_path(&self, path: &Path) -> &str {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return DEFAULT_CONTENT_TYPE;
        };
        if let Some(mime) = self.overrides.get(ext) {
            return mime;
        }
        let lower = ext.to_ascii_lowercase();
        self.overrides
            .get(&lower)
            .map_or_else(|| builtin_content_type(&lower), String::as_str)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

/// Built-in table for a lower-case extension
pub fn builtin_content_type(extension: &str) -> &'static str {
    match extension {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "txt" | "md" => "text/plain; charset=utf-8",
        "csv" => "text/csv",
        "xml" => "application/xml",

        // Scripts, data, maps
        "js" | "mjs" => "text/javascript",
        "json" | "map" => "application/json",
        "wasm" => "application/wasm",
        "webmanifest" => "application/manifest+json",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "avif" => "image/avif",

        // Media
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Documents and archives
        "pdf" => "application/pdf",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xls" => "application/vnd.ms-excel",
        "zip" => "application/zip",
        "gz" => "application/gzip",

        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_types() -> ContentTypes {
        let overrides = [
            (".js", "application/javascript"),
            (".css", "text/css"),
            ("html", "text/html"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        ContentTypes::with_overrides(&overrides)
    }

    #[test]
    fn test_overrides_win() {
        let types = dist_types();
        assert_eq!(types.for_path(Path::new("app.js")), "application/javascript");
        assert_eq!(types.for_path(Path::new("index.html")), "text/html");
        assert_eq!(types.for_path(Path::new("site.css")), "text/css");
        assert_eq!(types.for_path(Path::new("APP.JS")), "application/javascript");
    }

    #[test]
    fn test_builtin_fallback() {
        let types = dist_types();
        assert_eq!(types.for_path(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(types.for_path(Path::new("data.json")), "application/json");
        assert_eq!(
            ContentTypes::default().for_path(Path::new("app.js")),
            "text/javascript"
        );
    }

    #[test]
    fn test_unknown_extension() {
        let types = dist_types();
        assert_eq!(types.for_path(Path::new("blob.xyz")), DEFAULT_CONTENT_TYPE);
        assert_eq!(types.for_path(Path::new("Makefile")), DEFAULT_CONTENT_TYPE);
    }
}
