/// Parameters passed to the billing client when launching a purchase flow.
///
/// https://developer.android.com/reference/com/android/billingclient/api/BillingFlowParams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingFlowParamsModel {
    pub sku: String,
    /// Sku of the subscription being replaced, for upgrades/downgrades.
    pub old_sku: Option<String>,
    /// Obfuscated account identifier forwarded to the billing service.
    pub account_id: Option<String>,
}
