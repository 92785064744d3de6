//! Search queries against the store.

use crate::app::AppDetail;

/// Parsed `/search` parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search keyword, empty when absent
    pub q: String,
}

impl SearchQuery {
    /// Build a query from a raw `application/x-www-form-urlencoded` string.
    ///
    /// Blank values are skipped and the first non-blank `q` wins. Parsing
    /// never fails; undecodable input simply yields an empty keyword.
    pub fn from_query_string(raw: Option<&str>) -> Self {
        let q = raw
            .and_then(|raw| {
                url::form_urlencoded::parse(raw.as_bytes())
                    .find(|(key, value)| key == "q" && !value.is_empty())
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default();

        Self { q }
    }

    /// Run the query.
    ///
    /// The mock store has no searchable index, so the result set is always
    /// empty regardless of the keyword.
    pub fn execute(&self) -> Vec<AppDetail> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query() {
        assert_eq!(SearchQuery::from_query_string(None).q, "");
        assert_eq!(SearchQuery::from_query_string(Some("")).q, "");
    }

    #[test]
    fn test_decodes_keyword() {
        let query = SearchQuery::from_query_string(Some("q=%E5%A4%A9%E6%B0%94+app&page=2"));
        assert_eq!(query.q, "天气 app");
    }

    #[test]
    fn test_first_non_blank_keyword_wins() {
        let query = SearchQuery::from_query_string(Some("q=&q=weather&q=other"));
        assert_eq!(query.q, "weather");
    }

    #[test]
    fn test_results_always_empty() {
        let query = SearchQuery::from_query_string(Some("q=weather"));
        assert!(query.execute().is_empty());
    }
}
