//! API Response types
//!
//! The backend is not consistent about how it wraps list responses. Two
//! envelope shapes are in use, and a few endpoints return a bare array:
//!
//! ```json
//! { "pagination": { "data": [...], "current_page": 1, "per_page": 10, "total_items": 95, "total_pages": 10 } }
//! { "data": [...], "page": 1, "perPage": 10, "totalItems": 95, "totalPages": 10 }
//! [ ... ]
//! ```
//!
//! [`RawEnvelope`] accepts all three and [`RawEnvelope::normalize`] turns
//! them into a single [`PageEnvelope`], filling in whatever the server left
//! out from the request that was sent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    pub current_page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    /// Create a new pagination, deriving `total_pages`
    pub fn new(current_page: u32, per_page: u32, total_items: u64) -> Self {
        Self {
            current_page,
            per_page,
            total_items,
            total_pages: total_pages(total_items, per_page),
        }
    }

    /// Whether `page` is a valid navigation target
    ///
    /// Valid pages are `1..=total_pages`; an empty list still has page 1.
    pub fn contains_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages.max(1)
    }

    /// Clamp a page number into the valid range
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 10, 0)
    }
}

/// `ceil(total_items / per_page)`, zero when `per_page` is zero
pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    u32::try_from(total_items.div_ceil(per_page as u64)).unwrap_or(u32::MAX)
}

/// Normalized list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PageEnvelope<T> {
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    pub fn empty(page: u32, per_page: u32) -> Self {
        Self::new(Vec::new(), Pagination::new(page, per_page, 0))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: DeserializeOwned> PageEnvelope<T> {
    /// Parse any accepted envelope shape and normalize it
    pub fn from_value(
        value: serde_json::Value,
        requested_page: u32,
        requested_limit: u32,
    ) -> Result<Self, serde_json::Error> {
        let raw: RawEnvelope<T> = serde_json::from_value(value)?;
        Ok(raw.normalize(requested_page, requested_limit))
    }
}

/// Any of the list envelope shapes the backend produces
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawEnvelope<T> {
    Nested { pagination: RawPage<T> },
    Flat(RawPage<T>),
    Bare(Vec<T>),
}

/// Page body with every metadata field optional
#[derive(Debug, Deserialize)]
pub struct RawPage<T> {
    pub data: Vec<T>,
    #[serde(default, alias = "page", deserialize_with = "lenient_u64")]
    pub current_page: Option<u64>,
    #[serde(default, alias = "perPage", alias = "limit", deserialize_with = "lenient_u64")]
    pub per_page: Option<u64>,
    #[serde(default, alias = "totalItems", alias = "total", deserialize_with = "lenient_u64")]
    pub total_items: Option<u64>,
    #[serde(default, alias = "totalPages", alias = "last_page", deserialize_with = "lenient_u64")]
    pub total_pages: Option<u64>,
}

impl<T> RawEnvelope<T> {
    /// Apply the fallback rules
    ///
    /// - missing `per_page` -> the requested limit
    /// - missing `total_items` -> the number of items received
    /// - missing `total_pages` -> recomputed from the two above
    /// - missing page -> the requested page
    pub fn normalize(self, requested_page: u32, requested_limit: u32) -> PageEnvelope<T> {
        let page = match self {
            Self::Nested { pagination } => pagination,
            Self::Flat(page) => page,
            Self::Bare(data) => RawPage {
                data,
                current_page: None,
                per_page: None,
                total_items: None,
                total_pages: None,
            },
        };

        let per_page = page
            .per_page
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v > 0)
            .unwrap_or(requested_limit);
        let total_items = page.total_items.unwrap_or(page.data.len() as u64);
        let current_page = page
            .current_page
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v > 0)
            .unwrap_or(requested_page.max(1));
        let total_pages = page
            .total_pages
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or_else(|| total_pages(total_items, per_page));

        PageEnvelope {
            items: page.data,
            pagination: Pagination {
                current_page,
                per_page,
                total_items,
                total_pages,
            },
        }
    }
}

/// Accept `10`, `"10"` or `null`
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Float(f)) if f.is_finite() && f >= 0.0 => Some(f as u64),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Body of a create/update/delete/status response
///
/// Only the message is used (as the success notice); the record itself is
/// re-read through a list refetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_contains_page() {
        let p = Pagination::new(1, 10, 95);
        assert_eq!(p.total_pages, 10);
        assert!(!p.contains_page(0));
        assert!(p.contains_page(1));
        assert!(p.contains_page(10));
        assert!(!p.contains_page(11));

        // Empty list still has a first page
        let empty = Pagination::new(1, 10, 0);
        assert!(empty.contains_page(1));
        assert!(!empty.contains_page(2));
    }

    #[test]
    fn test_nested_envelope() {
        let body = json!({
            "pagination": {
                "data": [1, 2, 3],
                "current_page": 2,
                "per_page": 3,
                "total_items": 9,
                "total_pages": 3
            }
        });
        let page: PageEnvelope<u32> = PageEnvelope::from_value(body, 1, 10).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.pagination, Pagination::new(2, 3, 9));
    }

    #[test]
    fn test_flat_envelope_camel_case() {
        let body = json!({
            "data": [1],
            "page": "4",
            "perPage": 5,
            "totalItems": 16,
            "totalPages": 4
        });
        let page: PageEnvelope<u32> = PageEnvelope::from_value(body, 1, 10).unwrap();
        assert_eq!(page.pagination.current_page, 4);
        assert_eq!(page.pagination.per_page, 5);
        assert_eq!(page.pagination.total_items, 16);
        assert_eq!(page.pagination.total_pages, 4);
    }

    #[test]
    fn test_missing_metadata_falls_back_to_request() {
        let body = json!({ "data": [1, 2] });
        let page: PageEnvelope<u32> = PageEnvelope::from_value(body, 3, 25).unwrap();
        assert_eq!(page.pagination.current_page, 3);
        assert_eq!(page.pagination.per_page, 25);
        assert_eq!(page.pagination.total_items, 2);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_out_of_range_metadata_uses_fallbacks() {
        let body = json!({
            "data": [1, 2],
            "page": 4_294_967_297u64,
            "perPage": 4_294_967_306u64,
            "totalItems": 2,
            "totalPages": 8_589_934_592u64
        });
        let page: PageEnvelope<u32> = PageEnvelope::from_value(body, 3, 25).unwrap();
        assert_eq!(page.pagination.current_page, 3);
        assert_eq!(page.pagination.per_page, 25);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_bare_array() {
        let page: PageEnvelope<String> =
            PageEnvelope::from_value(json!(["a", "b"]), 1, 10).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total_items, 2);
    }

    #[test]
    fn test_unrecognized_shape_is_error() {
        let result = PageEnvelope::<u32>::from_value(json!({ "rows": [] }), 1, 10);
        assert!(result.is_err());
    }
}
