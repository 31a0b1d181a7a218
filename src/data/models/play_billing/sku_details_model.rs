/// Product metadata object handed back by the billing client's sku details
/// query.
///
/// https://developer.android.com/reference/com/android/billingclient/api/SkuDetails
///
/// Micros amounts and cycle counts keep the client's native integer types
/// here; they are stringified only at the bridge boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuDetailsModel {
    pub description: String,
    /// Trial period in ISO 8601 format, empty when the product has none.
    pub free_trial_period: String,
    /// Formatted introductory price, empty when the product has none.
    pub introductory_price: String,
    pub introductory_price_amount_micros: i64,
    /// Number of billing cycles the introductory price applies for.
    pub introductory_price_cycles: i32,
    /// Introductory price billing period in ISO 8601 format.
    pub introductory_price_period: String,
    /// Formatted price including the currency sign.
    pub price: String,
    /// Price in 1/1,000,000 of the currency base unit.
    pub price_amount_micros: i64,
    /// ISO 4217 currency code of the price.
    pub price_currency_code: String,
    pub sku: String,
    /// Subscription billing period in ISO 8601 format.
    pub subscription_period: String,
    pub title: String,
    /// Sku type, "subs" or "inapp".
    pub sku_type: String,
}
