//! Request dispatch module
//!
//! Entry point for HTTP request processing: method check, path resolution,
//! directory handling, and access logging.

use crate::config::AppState;
use crate::handler::listing;
use crate::handler::static_files::{self, Resolved};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use percent_encoding::percent_decode_str;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Raw (still percent-encoded) URL path
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
}

/// Main entry point for HTTP request handling
///
/// Generic over the request body, which is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = route_request(&req, &state).await;

    if state.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri()
                .path_and_query()
                .map_or_else(|| req.uri().path().to_string(), ToString::to_string),
        );
        entry.version = req.version();
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.access_log_format);
    }

    Ok(response)
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

async fn route_request<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    let method = req.method();
    if method != Method::GET && method != Method::HEAD {
        logger::log_warning(&format!("Unsupported method: {method}"));
        return http::build_501_response();
    }

    let ctx = RequestContext {
        path: req.uri().path(),
        query: req.uri().query(),
        is_head: method == Method::HEAD,
        if_none_match: header_string(req, "if-none-match"),
        if_modified_since: header_string(req, "if-modified-since"),
    };

    match static_files::resolve(&state.root, ctx.path).await {
        Resolved::File(path) => static_files::serve_file(&ctx, &path, &state.content_types).await,
        Resolved::Directory(dir) => serve_directory(&ctx, &dir, state).await,
        Resolved::NotFound => http::build_404_response(ctx.is_head),
    }
}

/// Directories need a trailing slash so relative links resolve; then the
/// index file is served if present, otherwise a listing.
async fn serve_directory(
    ctx: &RequestContext<'_>,
    dir: &std::path::Path,
    state: &AppState,
) -> Response<Full<Bytes>> {
    if !ctx.path.ends_with('/') {
        // A leading "//" would make the Location protocol-relative
        let path = format!("/{}", ctx.path.trim_start_matches('/'));
        let location = match ctx.query {
            Some(q) => format!("{path}/?{q}"),
            None => format!("{path}/"),
        };
        return http::build_301_response(&location);
    }

    if let Some(index) = static_files::find_index(&state.root, dir, &state.index_files).await {
        return static_files::serve_file(ctx, &index, &state.content_types).await;
    }

    let display_path = percent_decode_str(ctx.path).decode_utf8_lossy();
    listing::serve_listing(dir, &display_path, ctx.is_head).await
}
