//! HTTP response building module
//!
//! Builders for the fixed set of responses the service produces.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build 200 plain-text response carrying the comma-joined café list.
///
/// The body has no trailing newline.
pub fn build_text_response(body: String, server_name: &str) -> Response<Full<Bytes>> {
    let content_length = body.len();

    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content_length)
        .header("Server", server_name)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 validation-error response.
///
/// The body is the message followed by a single newline.
pub fn build_error_response(message: &str, server_name: &str) -> Response<Full<Bytes>> {
    let body = format!("{message}\n");

    Response::builder()
        .status(400)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .header("Server", server_name)
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            let mut resp = Response::new(Full::new(Bytes::from(body)));
            *resp.status_mut() = StatusCode::BAD_REQUEST;
            resp
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
