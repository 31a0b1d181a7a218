use thiserror::Error;

use crate::domain::entities::billing_response::BillingResponse;

/// Rejection reasons surfaced to host code.
///
/// Each carries a stable code string (the machine-readable half of the
/// rejection pair) plus a message embedding the billing client's mapped
/// response label where one exists. Nothing is retried or aggregated; every
/// failure surfaces exactly once, straight from the client's response code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("billing setup finished with {response}")]
    ConnectionFailed { response: BillingResponse },

    #[error("unrecognized feature: {feature}")]
    UnrecognizedFeature { feature: String },

    #[error("sku details query finished with {response}")]
    SkuDetailsLoadFailed { response: BillingResponse },

    #[error("billing flow params did not contain a sku")]
    MissingSku,

    #[error("billing flow launch finished with {response}")]
    LaunchBillingFlowFailed { response: BillingResponse },

    #[error("purchases query finished with {response}")]
    QueryPurchasesFailed { response: BillingResponse },

    #[error("purchase history query finished with {response}")]
    QueryPurchaseHistoryFailed { response: BillingResponse },

    #[error("no active billing connection")]
    NotConnected,
}

impl BridgeError {
    /// Stable rejection code for the host side of the boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConnectionFailed { .. } => "E_CONNECTION",
            Self::UnrecognizedFeature { .. } => "E_UNRECOGNIZED_FEATURE",
            Self::SkuDetailsLoadFailed { .. } => "E_QUERY_SKU_DETAILS",
            Self::MissingSku => "E_MISSING_SKU",
            Self::LaunchBillingFlowFailed { .. } => "E_LAUNCH_BILLING_FLOW",
            Self::QueryPurchasesFailed { .. } => "E_QUERY_PURCHASES",
            Self::QueryPurchaseHistoryFailed { .. } => "E_QUERY_PURCHASE_HISTORY_ASYNC",
            Self::NotConnected => "E_NOT_CONNECTED",
        }
    }
}
