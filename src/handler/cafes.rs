//! Café query processing
//!
//! Validates the `count` and `city` parameters against the directory and
//! builds the comma-joined café list. Validation is fail-fast: the first
//! failing check determines the error, in the fixed order below.

use thiserror::Error;

use crate::directory::Directory;

/// Validation failures for a café query, in check order.
///
/// The display strings are part of the wire contract; the response body is
/// the message followed by a newline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CafeQueryError {
    #[error("count missing")]
    CountMissing,
    #[error("wrong count value")]
    WrongCountValue,
    #[error("city missing")]
    CityMissing,
    #[error("wrong city value")]
    WrongCityValue,
}

/// Select up to `count` café names for `city` from the directory.
///
/// Checks run in order: count present, count parseable, city present, city
/// known. A count larger than the city's list is clamped to the full list,
/// and `count=0` yields an empty string. Negative counts fail the unsigned
/// integer parse and are reported as `wrong count value`.
pub fn select_cafes(
    directory: &Directory,
    count: Option<&str>,
    city: Option<&str>,
) -> Result<String, CafeQueryError> {
    let count = match count {
        Some(c) if !c.is_empty() => c,
        _ => return Err(CafeQueryError::CountMissing),
    };

    let count: usize = count.parse().map_err(|_| CafeQueryError::WrongCountValue)?;

    let city = match city {
        Some(c) if !c.is_empty() => c,
        _ => return Err(CafeQueryError::CityMissing),
    };

    let cafes = directory.cafes(city).ok_or(CafeQueryError::WrongCityValue)?;

    let take = count.min(cafes.len());
    Ok(cafes[..take].join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectoryConfig;

    fn directory() -> Directory {
        Directory::from_config(&DirectoryConfig::default())
    }

    #[test]
    fn test_valid_request() {
        let result = select_cafes(&directory(), Some("2"), Some("moscow"));
        assert_eq!(result, Ok("Мир кофе,Сладкоежка".to_string()));
    }

    #[test]
    fn test_count_clamped_to_full_list() {
        let result = select_cafes(&directory(), Some("10"), Some("moscow"));
        assert_eq!(
            result,
            Ok("Мир кофе,Сладкоежка,Кофе и завтраки,Сытый студент".to_string())
        );
    }

    #[test]
    fn test_count_equal_to_list_length() {
        let dir = directory();
        let clamped = select_cafes(&dir, Some("10"), Some("moscow"));
        let exact = select_cafes(&dir, Some("4"), Some("moscow"));
        assert_eq!(clamped, exact);
    }

    #[test]
    fn test_count_zero_yields_empty_body() {
        let result = select_cafes(&directory(), Some("0"), Some("moscow"));
        assert_eq!(result, Ok(String::new()));
    }

    #[test]
    fn test_count_absent() {
        let result = select_cafes(&directory(), None, Some("moscow"));
        assert_eq!(result, Err(CafeQueryError::CountMissing));
    }

    #[test]
    fn test_count_empty_string() {
        let result = select_cafes(&directory(), Some(""), Some("moscow"));
        assert_eq!(result, Err(CafeQueryError::CountMissing));
    }

    #[test]
    fn test_count_not_an_integer() {
        let result = select_cafes(&directory(), Some("invalid"), Some("moscow"));
        assert_eq!(result, Err(CafeQueryError::WrongCountValue));
    }

    #[test]
    fn test_count_negative() {
        let result = select_cafes(&directory(), Some("-1"), Some("moscow"));
        assert_eq!(result, Err(CafeQueryError::WrongCountValue));
    }

    #[test]
    fn test_count_not_base_10() {
        let result = select_cafes(&directory(), Some("2.5"), Some("moscow"));
        assert_eq!(result, Err(CafeQueryError::WrongCountValue));
    }

    #[test]
    fn test_city_absent() {
        let result = select_cafes(&directory(), Some("2"), None);
        assert_eq!(result, Err(CafeQueryError::CityMissing));
    }

    #[test]
    fn test_city_empty_string() {
        let result = select_cafes(&directory(), Some("2"), Some(""));
        assert_eq!(result, Err(CafeQueryError::CityMissing));
    }

    #[test]
    fn test_city_unknown() {
        let result = select_cafes(&directory(), Some("2"), Some("atlantis"));
        assert_eq!(result, Err(CafeQueryError::WrongCityValue));
    }

    #[test]
    fn test_count_checked_before_city() {
        // Both parameters invalid: count wins, fail-fast
        let result = select_cafes(&directory(), None, None);
        assert_eq!(result, Err(CafeQueryError::CountMissing));

        let result = select_cafes(&directory(), Some("abc"), Some("atlantis"));
        assert_eq!(result, Err(CafeQueryError::WrongCountValue));
    }

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(CafeQueryError::CountMissing.to_string(), "count missing");
        assert_eq!(
            CafeQueryError::WrongCountValue.to_string(),
            "wrong count value"
        );
        assert_eq!(CafeQueryError::CityMissing.to_string(), "city missing");
        assert_eq!(CafeQueryError::WrongCityValue.to_string(), "wrong city value");
    }
}
