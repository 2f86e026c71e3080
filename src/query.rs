//! Shared pagination and date-range query for list endpoints.

use chrono::{DateTime, Utc};

/// Query parameters accepted by every list endpoint: pagination plus an
/// optional creation-date range.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Results per page. `None` uses the API default (50).
    pub per_page: Option<i64>,
    /// Page number (1-indexed). `None` uses the first page.
    pub page: Option<i64>,
    /// Only include records created at or after this instant.
    pub from: Option<DateTime<Utc>>,
    /// Only include records created at or before this instant.
    pub to: Option<DateTime<Utc>>,
}

impl ListQuery {
    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the lower creation-date bound.
    pub fn with_from(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the upper creation-date bound.
    pub fn with_to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    /// Renders the parameters as an encoded query string, without the
    /// leading `?`. Empty when no parameter is set.
    pub fn to_query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(per_page) = self.per_page {
            query.append_pair("perPage", &per_page.to_string());
        }
        if let Some(page) = self.page {
            query.append_pair("page", &page.to_string());
        }
        if let Some(from) = self.from {
            query.append_pair("from", &from.to_rfc3339());
        }
        if let Some(to) = self.to {
            query.append_pair("to", &to.to_rfc3339());
        }
        query.finish()
    }

    /// Appends the encoded query to `path`, producing the path the
    /// dispatcher expects (query pre-encoded by the caller).
    pub(crate) fn apply(&self, path: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_query_leaves_path_untouched() {
        let query = ListQuery::default();
        assert_eq!(query.apply("/transaction"), "/transaction");
    }

    #[test]
    fn pagination_params_are_appended() {
        let query = ListQuery::default().with_per_page(5).with_page(2);
        assert_eq!(query.apply("/customer"), "/customer?perPage=5&page=2");
    }

    #[test]
    fn date_bounds_are_rfc3339_encoded() {
        let from = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let query = ListQuery::default().with_from(from);
        let rendered = query.to_query();
        assert!(rendered.starts_with("from=2024-06-01T00"));
    }
}
