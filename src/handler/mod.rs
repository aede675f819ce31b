//! Request handler module
//!
//! Responsible for request routing dispatch and café query processing.

pub mod cafes;
pub mod query;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
