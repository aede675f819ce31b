//! Query-string extraction module
//!
//! First-value, name-keyed lookup over a raw query string. Parameters may
//! appear in any order; parameters the caller never asks for are ignored.

use std::borrow::Cow;

/// Decoded query parameters in their original order
pub struct QueryParams<'a> {
    pairs: Vec<(Cow<'a, str>, Cow<'a, str>)>,
}

impl<'a> QueryParams<'a> {
    /// Parse a raw query string (the part after `?`, without the `?`)
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(raw.as_bytes()).collect(),
        }
    }

    /// First value for a parameter name (case-sensitive), `None` if absent
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
    }
}
