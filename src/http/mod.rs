//! HTTP protocol layer module
//!
//! Response builders shared by the request handler, decoupled from the café
//! query logic.

pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_error_response, build_text_response};
