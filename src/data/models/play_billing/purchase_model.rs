/// Purchase object handed back by the billing client's purchase queries and
/// its purchases-updated callback.
///
/// https://developer.android.com/reference/com/android/billingclient/api/Purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseModel {
    pub order_id: String,
    /// Raw JSON receipt the signature was computed over.
    pub original_json: String,
    pub package_name: String,
    /// Purchase time in milliseconds since the epoch.
    pub purchase_time: i64,
    /// Opaque token identifying this purchase to the billing service.
    pub purchase_token: String,
    /// Signature of `original_json`, signed with the developer key.
    pub signature: String,
    pub sku: String,
    pub is_auto_renewing: bool,
}
