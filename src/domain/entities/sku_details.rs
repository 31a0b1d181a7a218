use serde::Serialize;

/// Cross-boundary snapshot of one purchasable product, produced fresh for
/// every query.
///
/// Micros amounts are serialized as text so host runtimes without a 64-bit
/// integer type do not lose precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuDetails {
    pub description: String,
    pub free_trial_period: String,
    pub introductory_price: String,
    pub introductory_price_amount_micros: String,
    pub introductory_price_cycles: String,
    pub introductory_price_period: String,
    pub price: String,
    pub price_amount_micros: String,
    pub price_currency_code: String,
    pub sku: String,
    pub subscription_period: String,
    pub title: String,
    #[serde(rename = "type")]
    pub product_type: String,
}
