// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
}

/// Café directory contents, keyed by case-sensitive city name.
///
/// Each city maps to its café names in listing order; that order is what
/// truncated responses preserve.
#[derive(Debug, Deserialize, Clone)]
pub struct DirectoryConfig {
    pub cities: HashMap<String, Vec<String>>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        let mut cities = HashMap::new();
        cities.insert(
            "moscow".to_string(),
            vec![
                "Мир кофе".to_string(),
                "Сладкоежка".to_string(),
                "Кофе и завтраки".to_string(),
                "Сытый студент".to_string(),
            ],
        );
        Self { cities }
    }
}
