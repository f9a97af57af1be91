//! The catalog listing record submitted to the marketplace.

use std::any::Any;

use ebaylink_model::CatalogRecord;

/// Return policy attached to a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnPolicy {
    /// Whether returns are accepted.
    pub returns_accepted: bool,
    /// Refund option code (for example `MoneyBack`).
    pub refund_option: String,
    /// Return window code.
    pub returns_within: String,
    /// Free-text policy description.
    pub description: String,
    /// Who pays return shipping.
    pub shipping_cost_paid_by: String,
}

impl Default for ReturnPolicy {
    fn default() -> Self {
        Self {
            returns_accepted: true,
            refund_option: "MoneyBack".to_owned(),
            returns_within: "Days_30".to_owned(),
            description: String::new(),
            shipping_cost_paid_by: "Buyer".to_owned(),
        }
    }
}

/// One shipping service option offered on a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingService {
    /// Priority among the listing's shipping options.
    pub priority: u32,
    /// Shipping service code.
    pub service: String,
    /// Additional per-item cost.
    pub additional_cost: f64,
    /// Whether shipping is free.
    pub free_shipping: bool,
}

impl Default for ShippingService {
    fn default() -> Self {
        Self {
            priority: 1,
            service: String::new(),
            additional_cost: 0.0,
            free_shipping: false,
        }
    }
}

/// A catalog listing in the form the normalizer consumes.
///
/// Site-wide values (country, postal code, payment address) come from
/// [`SiteDefaults`](crate::normalize::SiteDefaults) rather than the record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    /// Stock keeping unit; also the inventory tracking key.
    pub sku: String,
    /// Listing title. Required.
    pub title: String,
    /// Listing description; may contain HTML.
    pub description: String,
    /// Marketplace category id.
    pub category_id: String,
    /// Fixed listing price.
    pub start_price: f64,
    /// Price currency code.
    pub currency: String,
    /// Quantity offered.
    pub quantity: u32,
    /// Item condition id (1000 = new).
    pub condition_id: u32,
    /// Listing duration code.
    pub listing_duration: String,
    /// Maximum handling time in days.
    pub dispatch_time_max: u32,
    /// Gallery picture URL; a placeholder is substituted when absent.
    pub picture_url: Option<String>,
    /// Item specifics as name/value pairs.
    pub specifics: Vec<(String, String)>,
}

impl Listing {
    /// Create a listing with the given SKU and title, defaulting the
    /// commercial fields (USD, quantity 1, new condition, 3-day duration,
    /// 1-day handling).
    pub fn new(sku: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            title: title.into(),
            currency: "USD".to_owned(),
            quantity: 1,
            condition_id: 1000,
            listing_duration: "Days_3".to_owned(),
            dispatch_time_max: 1,
            ..Self::default()
        }
    }
}

impl CatalogRecord for Listing {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn describe(&self) -> String {
        format!("listing {}", self.sku)
    }
}
