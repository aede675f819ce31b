//! Café directory HTTP service.
//!
//! Exposes a single `GET /cafe` endpoint returning a comma-separated list of
//! café names for a requested city, truncated to a requested count. The café
//! directory is built once at startup from configuration and shared read-only
//! across all request handlers.

pub mod config;
pub mod directory;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
