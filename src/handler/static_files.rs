//! Static file serving module
//!
//! Maps URL paths onto the serving root, keeps every resolved path inside it,
//! and builds file responses with cache validators.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, ContentTypes, FileHeaders};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// What a request path points at, after containment checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    File(PathBuf),
    Directory(PathBuf),
    NotFound,
}

/// Translate a URL path into a path under `root`
///
/// The path is percent-decoded and normalized lexically: empty and `.`
/// segments are dropped, `..` removes the previous segment and can never climb
/// above `root`, and segments that are not a single plain file name (drive
/// prefixes, embedded separators) are ignored.
pub fn translate_path(root: &Path, request_path: &str) -> PathBuf {
    let decoded = percent_decode_str(request_path).decode_utf8_lossy();
    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s if is_plain_segment(s) => segments.push(s),
            _ => {}
        }
    }
    segments
        .into_iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Resolve a request path against `root`
///
/// A trailing slash only ever names a directory.
pub async fn resolve(root: &Path, request_path: &str) -> Resolved {
    let resolved = classify(root, translate_path(root, request_path)).await;
    let wants_directory = percent_decode_str(request_path)
        .decode_utf8_lossy()
        .ends_with('/');
    match resolved {
        Resolved::File(_) if wants_directory => Resolved::NotFound,
        other => other,
    }
}

/// Classify `path`, refusing anything whose real location is outside `root`
async fn classify(root: &Path, path: PathBuf) -> Resolved {
    let Ok(metadata) = fs::metadata(&path).await else {
        return Resolved::NotFound;
    };
    if !is_within_root(root, &path).await {
        return Resolved::NotFound;
    }
    if metadata.is_dir() {
        Resolved::Directory(path)
    } else {
        Resolved::File(path)
    }
}

/// Symlinks may still point outside the root, so compare canonical paths
async fn is_within_root(root: &Path, path: &Path) -> bool {
    let root_canonical = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Serving directory not found or inaccessible '{}': {e}",
                root.display()
            ));
            return false;
        }
    };
    let Ok(path_canonical) = fs::canonicalize(path).await else {
        return false;
    };
    if path_canonical.starts_with(&root_canonical) {
        true
    } else {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path.display(),
            path_canonical.display()
        ));
        false
    }
}

/// First configured index file present in `dir`
pub async fn find_index(root: &Path, dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    for index_file in index_files {
        if let Resolved::File(path) = classify(root, dir.join(index_file)).await {
            return Some(path);
        }
    }
    None
}

/// Serve a resolved file
pub async fn serve_file(
    ctx: &RequestContext<'_>,
    path: &Path,
    content_types: &ContentTypes,
) -> Response<Full<Bytes>> {
    let metadata = match fs::metadata(path).await {
        Ok(m) if m.is_file() => m,
        _ => return http::build_404_response(ctx.is_head),
    };

    let modified = metadata.modified().ok();
    let etag = cache::generate_etag(modified, metadata.len());
    let last_modified = modified.map(cache::format_http_date);

    // If-Modified-Since is only consulted when no If-None-Match was sent
    let not_modified = match ctx.if_none_match.as_deref() {
        Some(_) => cache::check_etag_match(ctx.if_none_match.as_deref(), &etag),
        None => cache::not_modified_since(ctx.if_modified_since.as_deref(), modified),
    };
    if not_modified {
        return http::build_304_response(&etag, last_modified.as_deref());
    }

    let body = if ctx.is_head {
        Bytes::new()
    } else {
        match fs::read(path).await {
            Ok(content) => Bytes::from(content),
            Err(e) => {
                logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
                return http::build_404_response(ctx.is_head);
            }
        }
    };

    let headers = FileHeaders {
        content_length: metadata.len(),
        content_type: content_types.for_path(path),
        etag: &etag,
        last_modified: last_modified.as_deref(),
    };
    http::build_file_response(body, &headers)
}
