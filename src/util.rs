use tokio::sync::broadcast;

use crate::{
    data::{
        datasources::play_billing_client_datasource::PlayBillingClientDatasource,
        repositories::billing_bridge_impl::BillingBridgeImpl,
    },
    domain::{
        entities::{
            billing_event::BillingEvent, billing_flow_params::BillingFlowParams,
            purchase::PurchasesData, sku_details::SkuDetails,
        },
        repositories::billing_bridge::BillingBridge,
    },
    errors::BridgeError,
};

/// Entry point for host application code.
///
/// Thin facade over a [`BillingBridge`]; every operation forwards unchanged.
pub struct SubscriptionUtils<R: BillingBridge> {
    bridge: R,
}

impl<R: BillingBridge> SubscriptionUtils<R> {
    pub async fn connect(&self) -> Result<(), BridgeError> {
        self.bridge.connect().await
    }

    pub async fn disconnect(&self) -> Result<(), BridgeError> {
        self.bridge.disconnect().await
    }

    pub async fn is_ready(&self) -> Result<bool, BridgeError> {
        self.bridge.is_ready().await
    }

    pub async fn is_feature_supported(&self, feature: &str) -> Result<bool, BridgeError> {
        self.bridge.is_feature_supported(feature).await
    }

    pub async fn query_sku_details(
        &self,
        skus: Vec<String>,
    ) -> Result<Vec<SkuDetails>, BridgeError> {
        self.bridge.query_sku_details(skus).await
    }

    pub async fn launch_billing_flow(
        &self,
        params: BillingFlowParams,
    ) -> Result<(), BridgeError> {
        self.bridge.launch_billing_flow(params).await
    }

    pub async fn query_purchases(&self) -> Result<PurchasesData, BridgeError> {
        self.bridge.query_purchases().await
    }

    pub async fn query_purchase_history(&self) -> Result<PurchasesData, BridgeError> {
        self.bridge.query_purchase_history().await
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BillingEvent> {
        self.bridge.subscribe()
    }
}

impl<D: PlayBillingClientDatasource> SubscriptionUtils<BillingBridgeImpl<D>> {
    /// Builds the bridge over the given billing client. The host's platform
    /// layer supplies the client implementation.
    pub fn new(client: D) -> Self {
        Self {
            bridge: BillingBridgeImpl::new(client),
        }
    }
}
