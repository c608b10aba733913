use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{AppError, AppResult};

pub const SEARCH_PATH: &str = "/search";

/// Everything except the characters `encodeURIComponent` leaves alone.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A trimmed, non-empty search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        format!(
            "{SEARCH_PATH}?q={}",
            utf8_percent_encode(&self.0, QUERY_COMPONENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_are_rejected() {
        for raw in ["", "   ", "\t\n", " \u{3000} "] {
            assert!(matches!(SearchQuery::parse(raw), Err(AppError::EmptyString)), "{raw:?}");
        }
    }

    #[test]
    fn queries_are_trimmed() {
        let query = SearchQuery::parse("  ABC 123 ").unwrap();
        assert_eq!(query.as_str(), "ABC 123");
    }

    #[test]
    fn plain_plate() {
        assert_eq!(SearchQuery::parse("ABC123").unwrap().url(), "/search?q=ABC123");
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            SearchQuery::parse("Jane Doe").unwrap().url(),
            "/search?q=Jane%20Doe"
        );
        assert_eq!(
            SearchQuery::parse("a&b=c/d?#+").unwrap().url(),
            "/search?q=a%26b%3Dc%2Fd%3F%23%2B"
        );
        assert_eq!(
            SearchQuery::parse("O'Neil (van)-1_x.y!~*").unwrap().url(),
            "/search?q=O'Neil%20(van)-1_x.y!~*"
        );
        assert_eq!(
            SearchQuery::parse("Peña").unwrap().url(),
            "/search?q=Pe%C3%B1a"
        );
    }
}
