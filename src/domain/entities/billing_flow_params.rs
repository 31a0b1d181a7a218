use serde::Deserialize;

/// Host-supplied parameters for launching the purchase flow.
///
/// `sku` is required; the bridge rejects before touching the billing client
/// when it is absent. `old_sku` marks an upgrade/downgrade of an existing
/// subscription, `account_id` is an obfuscated account identifier forwarded
/// to the billing service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingFlowParams {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub old_sku: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
}
