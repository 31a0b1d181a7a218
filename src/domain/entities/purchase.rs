use serde::Serialize;

use super::billing_response::BillingResponse;

/// Cross-boundary snapshot of one completed purchase.
///
/// `purchase_time` is epoch millis serialized as text for the same
/// precision reason as the micros fields on `SkuDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub order_id: String,
    /// Raw receipt JSON exactly as issued by the billing service.
    pub original_json: String,
    pub package_name: String,
    pub purchase_time: String,
    pub purchase_token: String,
    pub signature: String,
    pub sku: String,
    pub is_auto_renewing: bool,
}

/// Response-code-tagged purchase list, the resolution value of the purchase
/// queries and the payload of the purchase-updated event.
///
/// `purchases` is null, never an empty list, when the billing client
/// reports no purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasesData {
    pub billing_response: BillingResponse,
    pub purchases: Option<Vec<Purchase>>,
}
