//! List query parameters

use std::collections::BTreeMap;

use reqwest::Url;

/// Query sent with every list request
///
/// `page` and `limit` are always present. `keyword` is omitted when blank;
/// extra filters (`status`, `cat_id`, `warehouse_id`, ...) are sent in key
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub keyword: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
            keyword: None,
            filters: BTreeMap::new(),
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.set_keyword(keyword);
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.insert(key.into(), value.to_string());
        self
    }

    /// Set the keyword; whitespace-only input clears it
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        self.keyword = if keyword.trim().is_empty() {
            None
        } else {
            Some(keyword.trim().to_string())
        };
    }

    /// Path with the encoded query string, e.g. `/api/brands?page=1&limit=10`
    pub fn to_path(&self, base: &str) -> String {
        let mut params: Vec<(String, String)> = vec![
            ("page".into(), self.page.to_string()),
            ("limit".into(), self.limit.to_string()),
        ];
        if let Some(keyword) = &self.keyword {
            params.push(("keyword".into(), keyword.clone()));
        }
        for (key, value) in &self.filters {
            params.push((key.clone(), value.clone()));
        }

        // Url needs an absolute base; only the encoded query is kept
        match Url::parse_with_params("http://localhost/", &params) {
            Ok(url) => format!("{}?{}", base, url.query().unwrap_or_default()),
            Err(_) => base.to_string(),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1, crate::config::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_path_encodes_params() {
        let query = ListQuery::new(2, 25)
            .with_keyword("  usb hub ")
            .with_filter("status", "active")
            .with_filter("cat_id", 4);

        assert_eq!(
            query.to_path("/api/products"),
            "/api/products?page=2&limit=25&keyword=usb+hub&cat_id=4&status=active"
        );
    }

    #[test]
    fn test_blank_keyword_is_omitted() {
        let query = ListQuery::new(0, 10).with_keyword("   ");
        assert_eq!(query.page, 1);
        assert_eq!(query.to_path("/api/brands"), "/api/brands?page=1&limit=10");
    }
}
