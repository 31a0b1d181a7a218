use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

use crate::{
    data::{
        datasources::play_billing_client_datasource::{
            PlayBillingClientDatasource, PlayBillingClientListener,
        },
        models::play_billing::{
            billing_flow_params_model::BillingFlowParamsModel, purchase_model::PurchaseModel,
            sku_details_model::SkuDetailsModel,
        },
    },
    domain::{
        entities::{
            billing_event::BillingEvent,
            billing_feature::BillingFeature,
            billing_flow_params::BillingFlowParams,
            billing_response::BillingResponse,
            purchase::{Purchase, PurchasesData},
            sku_details::SkuDetails,
        },
        repositories::billing_bridge::BillingBridge,
    },
    errors::BridgeError,
};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Bridge over a Play Billing client.
///
/// Holds the only connection handle: populated by a successful `connect`,
/// cleared by `disconnect`. An unsolicited service disconnection does not
/// clear it; the client library reuses the same handle when the host calls
/// `connect` again.
pub struct BillingBridgeImpl<D: PlayBillingClientDatasource> {
    client: Arc<D>,
    connection: Mutex<Option<Arc<D>>>,
    events: broadcast::Sender<BillingEvent>,
}

/// Listener handed to the billing client; rebroadcasts its unsolicited
/// callbacks as bridge events. Send errors mean no subscriber is registered
/// and are dropped, keeping delivery at-most-once best-effort.
struct EventRelay {
    events: broadcast::Sender<BillingEvent>,
}

impl PlayBillingClientListener for EventRelay {
    fn on_billing_service_disconnected(&self) {
        debug!("billing service disconnected");
        let _ = self.events.send(BillingEvent::ConnectionLost);
    }

    fn on_purchases_updated(&self, response_code: i32, purchases: Option<Vec<PurchaseModel>>) {
        let data = PurchasesData::from_client_response(response_code, purchases);
        debug!(response = %data.billing_response, "purchases updated");
        let _ = self.events.send(BillingEvent::PurchasesUpdated(data));
    }
}

impl<D: PlayBillingClientDatasource> BillingBridgeImpl<D> {
    pub fn new(client: D) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            client: Arc::new(client),
            connection: Mutex::new(None),
            events,
        }
    }

    /// Active connection handle, or the not-connected rejection. Calls
    /// racing a disconnect fail here instead of reaching the client.
    async fn connected_client(&self) -> Result<Arc<D>, BridgeError> {
        self.connection
            .lock()
            .await
            .clone()
            .ok_or(BridgeError::NotConnected)
    }
}

#[async_trait]
impl<D: PlayBillingClientDatasource> BillingBridge for BillingBridgeImpl<D> {
    async fn connect(&self) -> Result<(), BridgeError> {
        let listener = Arc::new(EventRelay {
            events: self.events.clone(),
        });
        let response =
            BillingResponse::from_code(self.client.start_connection(listener).await);
        if !response.is_ok() {
            warn!(%response, "billing setup failed");
            return Err(BridgeError::ConnectionFailed { response });
        }
        *self.connection.lock().await = Some(Arc::clone(&self.client));
        debug!("billing connection established");
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), BridgeError> {
        if let Some(client) = self.connection.lock().await.take() {
            client.end_connection();
            debug!("billing connection ended");
        }
        Ok(())
    }

    async fn is_ready(&self) -> Result<bool, BridgeError> {
        match self.connection.lock().await.as_ref() {
            Some(client) => Ok(client.is_ready()),
            None => Ok(false),
        }
    }

    async fn is_feature_supported(&self, feature: &str) -> Result<bool, BridgeError> {
        let feature = BillingFeature::from_name(feature).ok_or_else(|| {
            BridgeError::UnrecognizedFeature {
                feature: feature.to_string(),
            }
        })?;
        let client = self.connected_client().await?;
        let response =
            BillingResponse::from_code(client.is_feature_supported(feature.feature_type()));
        Ok(response.is_ok())
    }

    async fn query_sku_details(&self, skus: Vec<String>) -> Result<Vec<SkuDetails>, BridgeError> {
        let client = self.connected_client().await?;
        let (code, details) = client.query_sku_details(&skus).await;
        let response = BillingResponse::from_code(code);
        if !response.is_ok() {
            return Err(BridgeError::SkuDetailsLoadFailed { response });
        }
        Ok(details
            .unwrap_or_default()
            .into_iter()
            .map(SkuDetails::from_client_model)
            .collect())
    }

    async fn launch_billing_flow(&self, params: BillingFlowParams) -> Result<(), BridgeError> {
        // Reject before touching the client; the flow must not launch
        // without a sku.
        let sku = params.sku.ok_or(BridgeError::MissingSku)?;
        let client = self.connected_client().await?;
        let response = BillingResponse::from_code(
            client
                .launch_billing_flow(BillingFlowParamsModel {
                    sku,
                    old_sku: params.old_sku,
                    account_id: params.account_id,
                })
                .await,
        );
        if !response.is_ok() {
            return Err(BridgeError::LaunchBillingFlowFailed { response });
        }
        Ok(())
    }

    async fn query_purchases(&self) -> Result<PurchasesData, BridgeError> {
        let client = self.connected_client().await?;
        let (code, purchases) = client.query_purchases();
        let response = BillingResponse::from_code(code);
        if !response.is_ok() {
            return Err(BridgeError::QueryPurchasesFailed { response });
        }
        Ok(PurchasesData::from_client_response(code, purchases))
    }

    async fn query_purchase_history(&self) -> Result<PurchasesData, BridgeError> {
        let client = self.connected_client().await?;
        let (code, purchases) = client.query_purchase_history().await;
        let response = BillingResponse::from_code(code);
        if !response.is_ok() {
            return Err(BridgeError::QueryPurchaseHistoryFailed { response });
        }
        Ok(PurchasesData::from_client_response(code, purchases))
    }

    fn subscribe(&self) -> broadcast::Receiver<BillingEvent> {
        self.events.subscribe()
    }
}

impl SkuDetails {
    /// Field-by-field transcription of the client's sku details object,
    /// stringifying the integer fields for cross-boundary transfer.
    fn from_client_model(m: SkuDetailsModel) -> Self {
        SkuDetails {
            description: m.description,
            free_trial_period: m.free_trial_period,
            introductory_price: m.introductory_price,
            introductory_price_amount_micros: m.introductory_price_amount_micros.to_string(),
            introductory_price_cycles: m.introductory_price_cycles.to_string(),
            introductory_price_period: m.introductory_price_period,
            price: m.price,
            price_amount_micros: m.price_amount_micros.to_string(),
            price_currency_code: m.price_currency_code,
            sku: m.sku,
            subscription_period: m.subscription_period,
            title: m.title,
            product_type: m.sku_type,
        }
    }
}

impl Purchase {
    fn from_client_model(m: PurchaseModel) -> Self {
        Purchase {
            order_id: m.order_id,
            original_json: m.original_json,
            package_name: m.package_name,
            purchase_time: m.purchase_time.to_string(),
            purchase_token: m.purchase_token,
            signature: m.signature,
            sku: m.sku,
            is_auto_renewing: m.is_auto_renewing,
        }
    }
}

impl PurchasesData {
    /// The client reports "no purchases" either as a missing list or as an
    /// empty one; both cross the boundary as null.
    pub(crate) fn from_client_response(
        response_code: i32,
        purchases: Option<Vec<PurchaseModel>>,
    ) -> Self {
        PurchasesData {
            billing_response: BillingResponse::from_code(response_code),
            purchases: purchases.filter(|p| !p.is_empty()).map(|p| {
                p.into_iter().map(Purchase::from_client_model).collect()
            }),
        }
    }
}
