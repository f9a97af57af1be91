//! Normalization of catalog listings into the node-source mapping form.

use ebaylink_model::{CatalogRecord, Value};
use ebaylink_xml::{EncodeError, ItemNormalizer};

use crate::listing::{Listing, ReturnPolicy, ShippingService};

/// Gallery picture substituted when a listing carries no image.
const PICTURE_PLACEHOLDER: &str = "https://ir.ebaystatic.com/pictures/aw/pics/stockimage1.jpg";

/// Site-wide listing values that do not vary per record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteDefaults {
    /// Country code the items ship from.
    pub country: String,
    /// Seller postal code.
    pub postal_code: String,
    /// PayPal address payments are routed to.
    pub paypal_email: String,
    /// Default shipping service option.
    pub shipping: ShippingService,
    /// Default return policy.
    pub return_policy: ReturnPolicy,
}

/// Converts [`Listing`] records into the Trading API `Item` mapping.
#[derive(Debug, Clone, Default)]
pub struct ListingNormalizer {
    defaults: SiteDefaults,
}

impl ListingNormalizer {
    /// Create a normalizer with the given site defaults.
    #[must_use]
    pub fn new(defaults: SiteDefaults) -> Self {
        Self { defaults }
    }
}

impl ItemNormalizer for ListingNormalizer {
    fn to_mapping(&self, record: &dyn CatalogRecord) -> Result<Value, EncodeError> {
        let Some(listing) = record.as_any().downcast_ref::<Listing>() else {
            return Err(EncodeError::UnencodableValue(record.describe()));
        };
        if listing.title.is_empty() {
            return Err(EncodeError::Normalize(format!(
                "listing {} has no title",
                listing.sku
            )));
        }

        let defaults = &self.defaults;
        let picture = listing
            .picture_url
            .clone()
            .unwrap_or_else(|| PICTURE_PLACEHOLDER.to_owned());

        let mut item = vec![
            entry("Title", listing.title.as_str().into()),
            entry("Description", listing.description.as_str().into()),
            entry(
                "PrimaryCategory",
                Value::Map(vec![(
                    "CategoryID".to_owned(),
                    listing.category_id.as_str().into(),
                )]),
            ),
            entry("CategoryMappingAllowed", true.into()),
            entry("Country", defaults.country.as_str().into()),
            entry("Quantity", listing.quantity.into()),
            entry("StartPrice", listing.start_price.into()),
            entry("Currency", listing.currency.as_str().into()),
            entry("PaymentMethods", "PayPal".into()),
            entry("PayPalEmailAddress", defaults.paypal_email.as_str().into()),
            entry("ListingType", "FixedPriceItem".into()),
            entry("ListingDuration", listing.listing_duration.as_str().into()),
            entry("SKU", listing.sku.as_str().into()),
            entry("InventoryTrackingMethod", "SKU".into()),
            entry("ConditionID", listing.condition_id.into()),
            entry("DispatchTimeMax", listing.dispatch_time_max.into()),
            entry("PostalCode", defaults.postal_code.as_str().into()),
            entry("ReturnPolicy", return_policy_value(&defaults.return_policy)),
            entry("ShippingDetails", shipping_details_value(&defaults.shipping)),
            entry(
                "PictureDetails",
                Value::Map(vec![("PictureURL".to_owned(), picture.into())]),
            ),
        ];

        if !listing.specifics.is_empty() {
            let pairs: Vec<Value> = listing
                .specifics
                .iter()
                .map(|(name, value)| {
                    Value::Map(vec![
                        ("Name".to_owned(), name.as_str().into()),
                        ("Value".to_owned(), value.as_str().into()),
                    ])
                })
                .collect();
            item.push(entry(
                "ItemSpecifics",
                Value::Map(vec![("NameValueList".to_owned(), Value::Seq(pairs))]),
            ));
        }

        Ok(Value::Map(item))
    }
}

fn entry(key: &str, value: Value) -> (String, Value) {
    (key.to_owned(), value)
}

fn return_policy_value(policy: &ReturnPolicy) -> Value {
    let accepted = if policy.returns_accepted {
        "ReturnsAccepted"
    } else {
        "ReturnsNotAccepted"
    };
    Value::Map(vec![
        entry("ReturnsAcceptedOption", accepted.into()),
        entry("RefundOption", policy.refund_option.as_str().into()),
        entry("ReturnsWithinOption", policy.returns_within.as_str().into()),
        entry("Description", policy.description.as_str().into()),
        entry(
            "ShippingCostPaidByOption",
            policy.shipping_cost_paid_by.as_str().into(),
        ),
    ])
}

fn shipping_details_value(shipping: &ShippingService) -> Value {
    Value::Map(vec![
        entry("ShippingType", "Flat".into()),
        entry(
            "ShippingServiceOptions",
            Value::Map(vec![
                entry("ShippingServicePriority", shipping.priority.into()),
                entry("ShippingService", shipping.service.as_str().into()),
                entry("FreeShipping", shipping.free_shipping.into()),
                entry(
                    "ShippingServiceAdditionalCost",
                    shipping.additional_cost.into(),
                ),
            ]),
        ),
    ])
}
