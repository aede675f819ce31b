//! Café directory module
//!
//! Immutable mapping from city name to its ordered list of café names.
//! Built once at startup from configuration and never mutated afterwards.

use std::collections::HashMap;

use crate::config::DirectoryConfig;

#[derive(Debug, Clone)]
pub struct Directory {
    cities: HashMap<String, Vec<String>>,
}

impl Directory {
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self {
            cities: config.cities.clone(),
        }
    }

    /// Look up a city's café list (case-sensitive exact match)
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_directory() -> Directory {
        Directory::from_config(&DirectoryConfig::default())
    }

    #[test]
    fn test_moscow_list_preserves_order() {
        let dir = default_directory();
        let cafes = dir.cafes("moscow").expect("moscow is in the default directory");
        assert_eq!(cafes.len(), 4);
        assert_eq!(
            cafes.join(","),
            "Мир кофе,Сладкоежка,Кофе и завтраки,Сытый студент"
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dir = default_directory();
        assert!(dir.cafes("Moscow").is_none());
        assert!(dir.cafes("MOSCOW").is_none());
    }

    #[test]
    fn test_unknown_city() {
        let dir = default_directory();
        assert!(dir.cafes("atlantis").is_none());
    }

    #[test]
    fn test_city_count() {
        assert_eq!(default_directory().city_count(), 1);
    }
}
