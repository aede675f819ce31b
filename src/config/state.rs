// Application state module
// Shared per-request state, read-only after startup

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::directory::Directory;

/// Application state shared across all request handlers.
///
/// Nothing here is written after construction, so concurrent handlers need
/// no synchronization beyond the atomic access-log flag.
pub struct AppState {
    pub config: Config,
    pub directory: Arc<Directory>,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let directory = Arc::new(Directory::from_config(&config.directory));

        Self {
            config: config.clone(),
            directory,
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
