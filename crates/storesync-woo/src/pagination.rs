//! WooCommerce page-number pagination via response headers.
//!
//! Every collection response carries the totals for the whole query:
//!
//! ```text
//! X-WP-Total: 137
//! X-WP-TotalPages: 14
//! ```
//!
//! Some caching proxies strip these headers; their absence is not an error.

use reqwest::header::HeaderMap;

pub const TOTAL_HEADER: &str = "x-wp-total";
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// Pagination totals read from a collection response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTotals {
    /// Number of records matching the query across all pages.
    pub total: u64,
    pub total_pages: u64,
}

impl Default for PageTotals {
    fn default() -> Self {
        Self {
            total: 0,
            total_pages: 1,
        }
    }
}

impl PageTotals {
    /// Reads `X-WP-Total` and `X-WP-TotalPages`, defaulting to `0` and `1`
    /// when a header is missing or not a non-negative integer.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let defaults = Self::default();
        Self {
            total: header_u64(headers, TOTAL_HEADER).unwrap_or(defaults.total),
            total_pages: header_u64(headers, TOTAL_PAGES_HEADER).unwrap_or(defaults.total_pages),
        }
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn reads_both_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("X-WP-Total", HeaderValue::from_static("137"));
        headers.insert("X-WP-TotalPages", HeaderValue::from_static("14"));
        assert_eq!(
            PageTotals::from_headers(&headers),
            PageTotals {
                total: 137,
                total_pages: 14
            }
        );
    }

    #[test]
    fn missing_headers_use_defaults() {
        let totals = PageTotals::from_headers(&HeaderMap::new());
        assert_eq!(totals.total, 0);
        assert_eq!(totals.total_pages, 1);
    }

    #[test]
    fn unparseable_header_is_treated_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert("X-WP-Total", HeaderValue::from_static("lots"));
        headers.insert("X-WP-TotalPages", HeaderValue::from_static("-2"));
        assert_eq!(PageTotals::from_headers(&headers), PageTotals::default());
    }
}
