//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: access logging, path matching,
//! and dispatch to the café query handler.

use std::convert::Infallible;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

use crate::config::AppState;
use crate::handler::cafes;
use crate::handler::query::QueryParams;
use crate::http;
use crate::logger;

const CAFE_PATH: &str = "/cafe";

/// Main entry point for HTTP request handling.
///
/// Generic over the request body: the endpoint never reads a body, and tests
/// drive it with stub bodies instead of a live connection.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let uri = req.uri();

    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    if access_log {
        logger::log_request(req.method(), uri, req.version());
    }

    if uri.path() != CAFE_PATH {
        return Ok(http::build_404_response());
    }

    let params = QueryParams::parse(uri.query().unwrap_or(""));
    let server_name = &state.config.http.server_name;

    let response = match cafes::select_cafes(
        &state.directory,
        params.first("count"),
        params.first("city"),
    ) {
        Ok(body) => {
            if access_log {
                logger::log_response(body.len());
            }
            http::build_text_response(body, server_name)
        }
        // Validation failures are answered, never logged or retried
        Err(err) => http::build_error_response(&err.to_string(), server_name),
    };

    Ok(response)
}
