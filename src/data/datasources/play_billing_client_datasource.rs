use std::sync::Arc;

use async_trait::async_trait;

use crate::data::models::play_billing::{
    billing_flow_params_model::BillingFlowParamsModel, purchase_model::PurchaseModel,
    sku_details_model::SkuDetailsModel,
};

/// Boundary trait standing in for the Play Billing client library.
///
/// The bridge never talks to the billing service itself; the host's platform
/// layer supplies the implementation backed by the real client, and tests
/// supply a mock. Methods surface the client's raw integer response codes
/// unchanged; mapping them is the bridge's job. Asynchronous methods settle
/// exactly once, on whatever task context the implementation uses, matching
/// the client library's own callback semantics.
#[async_trait]
pub trait PlayBillingClientDatasource: Send + Sync {
    /// BillingClient.startConnection: performs the service handshake and
    /// resolves with the setup-finished response code. The listener stays
    /// registered for unsolicited callbacks until the connection ends.
    async fn start_connection(&self, listener: Arc<dyn PlayBillingClientListener>) -> i32;

    /// BillingClient.endConnection.
    fn end_connection(&self);

    /// BillingClient.isReady.
    fn is_ready(&self) -> bool;

    /// BillingClient.isFeatureSupported, taking the client library's
    /// feature-type string and resolving with a response code (OK when
    /// supported, FEATURE_NOT_SUPPORTED otherwise).
    fn is_feature_supported(&self, feature_type: &str) -> i32;

    /// BillingClient.querySkuDetailsAsync for subscription products.
    async fn query_sku_details(&self, skus: &[String]) -> (i32, Option<Vec<SkuDetailsModel>>);

    /// BillingClient.launchBillingFlow, resolving with the launch response
    /// code. The flow's outcome arrives later through the listener.
    async fn launch_billing_flow(&self, params: BillingFlowParamsModel) -> i32;

    /// BillingClient.queryPurchases: cached-purchase lookup, synchronous in
    /// the client library. The list is `None` when the client has none to
    /// report.
    fn query_purchases(&self) -> (i32, Option<Vec<PurchaseModel>>);

    /// BillingClient.queryPurchaseHistoryAsync: most recent purchase per
    /// sku, including expired and consumed ones.
    async fn query_purchase_history(&self) -> (i32, Option<Vec<PurchaseModel>>);
}

/// Unsolicited callbacks the billing client delivers outside any bridge
/// call. Implemented by the bridge itself and handed to
/// [`PlayBillingClientDatasource::start_connection`].
pub trait PlayBillingClientListener: Send + Sync {
    /// BillingClientStateListener.onBillingServiceDisconnected.
    fn on_billing_service_disconnected(&self);

    /// PurchasesUpdatedListener.onPurchasesUpdated. `purchases` is `None`
    /// when the client reports no purchase list with the update.
    fn on_purchases_updated(&self, response_code: i32, purchases: Option<Vec<PurchaseModel>>);
}
