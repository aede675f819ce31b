// Server module entry point
// Provides listener setup, connection handling, and the accept loop

pub mod connection;
pub mod listener;

// Re-export commonly used functions
pub use listener::create_reusable_listener;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

/// Accept loop: every connection is served independently in its own task.
///
/// Requests carry no ordering guarantee or dependency between each other;
/// the shared state is read-only, so no coordination is needed here.
pub async fn run_server(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::accept_connection(stream, peer_addr, &state, &active_connections);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
