use std::fmt;

use crate::SearchError;

/// A recipe name to search for.
///
/// Always non-empty and trimmed; blank input is rejected before any request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl AsRef<str>) -> Result<Self, SearchError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(SearchQuery(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for SearchQuery {
    type Error = SearchError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        SearchQuery::new(text)
    }
}
