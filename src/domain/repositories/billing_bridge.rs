use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::{
    domain::entities::{
        billing_event::BillingEvent,
        billing_flow_params::BillingFlowParams,
        purchase::PurchasesData,
        sku_details::SkuDetails,
    },
    errors::BridgeError,
};

/// Host-facing operation surface of the bridge.
///
/// Every method is a thin pass-through to the billing client, reshaping data
/// only. Failures carry the client's response code mapped to its fixed
/// label; no retries, timeouts, or backoff are layered on top.
#[async_trait]
pub trait BillingBridge: Send + Sync {
    /// Establishes the billing connection. A later unsolicited disconnection
    /// is reported through [`BillingBridge::subscribe`], not as an error
    /// from any pending call.
    async fn connect(&self) -> Result<(), BridgeError>;

    /// Tears down the connection. Always succeeds.
    async fn disconnect(&self) -> Result<(), BridgeError>;

    /// Current connection readiness.
    async fn is_ready(&self) -> Result<bool, BridgeError>;

    /// Whether the billing client supports the named feature. Only the two
    /// fixed feature names are recognized.
    async fn is_feature_supported(&self, feature: &str) -> Result<bool, BridgeError>;

    /// Product metadata for the given skus.
    async fn query_sku_details(&self, skus: Vec<String>) -> Result<Vec<SkuDetails>, BridgeError>;

    /// Launches the purchase flow. The purchase itself is reported later
    /// through the purchase-updated event.
    async fn launch_billing_flow(&self, params: BillingFlowParams) -> Result<(), BridgeError>;

    /// Currently owned purchases from the client's cache.
    async fn query_purchases(&self) -> Result<PurchasesData, BridgeError>;

    /// Most recent purchase per sku, including non-subscription and expired
    /// ones.
    async fn query_purchase_history(&self) -> Result<PurchasesData, BridgeError>;

    /// Registers for unsolicited events: connection-lost and
    /// purchase-updated. Delivery is at-most-once best-effort.
    fn subscribe(&self) -> broadcast::Receiver<BillingEvent>;
}
