//! Wire shapes for the product-search API.
//!
//! The upstream wraps results in a `{ status, data: { products } }`
//! envelope and reports prices as display strings ("$1,099.99"); the
//! conversion to [`RawListing`] normalizes both away so the pipeline only
//! ever sees its own shape.

use rigrec_core::RawListing;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub status: String,
    pub data: SearchData,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// One product as the upstream reports it. Everything except the title and
/// URL is best-effort.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub product_title: String,
    pub product_url: String,
    pub product_price: Option<String>,
    pub product_photo: Option<String>,
}

impl ProductRecord {
    /// Converts the wire record into the pipeline's raw-listing shape.
    /// An unparseable price becomes `None` and is left for the pipeline's
    /// mandatory-field gate to reject.
    #[must_use]
    pub fn into_raw_listing(self) -> RawListing {
        let price = self.product_price.as_deref().and_then(parse_display_price);
        RawListing {
            title: self.product_title,
            url: self.product_url,
            price,
            image_url: self.product_photo,
        }
    }
}

/// Parses a display price like `"$1,099.99"` (currency symbol and thousands
/// separators optional) into a positive finite number.
pub(crate) fn parse_display_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_with_symbol_and_separator() {
        assert_eq!(parse_display_price("$1,099.99"), Some(1099.99));
    }

    #[test]
    fn price_plain_number() {
        assert_eq!(parse_display_price("749"), Some(749.0));
    }

    #[test]
    fn price_with_whitespace() {
        assert_eq!(parse_display_price("  $899.00 "), Some(899.0));
    }

    #[test]
    fn price_garbage_returns_none() {
        assert_eq!(parse_display_price("See price in cart"), None);
    }

    #[test]
    fn price_empty_returns_none() {
        assert_eq!(parse_display_price(""), None);
    }

    #[test]
    fn price_zero_returns_none() {
        assert_eq!(parse_display_price("$0.00"), None);
    }

    #[test]
    fn record_conversion_carries_fields() {
        let record = ProductRecord {
            product_title: "Gaming PC Intel Core i5, 16GB RAM".to_string(),
            product_url: "https://example.com/pc".to_string(),
            product_price: Some("$1,099.00".to_string()),
            product_photo: Some("https://example.com/pc.jpg".to_string()),
        };
        let raw = record.into_raw_listing();
        assert_eq!(raw.price, Some(1099.0));
        assert_eq!(raw.url, "https://example.com/pc");
        assert!(raw.image_url.is_some());
    }

    #[test]
    fn record_without_price_converts_to_none() {
        let record = ProductRecord {
            product_title: "Gaming PC".to_string(),
            product_url: "https://example.com/pc".to_string(),
            product_price: None,
            product_photo: None,
        };
        assert_eq!(record.into_raw_listing().price, None);
    }
}
