use super::purchase::PurchasesData;

/// Event name of [`BillingEvent::ConnectionLost`].
pub const EVENT_CONNECTION_LOST: &str = "com.primlo.subscripiton-utils.android.connection-lost";
/// Event name of [`BillingEvent::PurchasesUpdated`].
pub const EVENT_PURCHASE_UPDATED: &str = "com.primlo.subscripiton-utils.android.purchase-updated";

/// Unsolicited notification relayed from the billing client to event
/// subscribers. Delivery is at-most-once best-effort; no pending call is
/// rejected on behalf of either event.
#[derive(Debug, Clone, PartialEq)]
pub enum BillingEvent {
    /// The billing service connection was lost. Carries no payload.
    ConnectionLost,
    /// New or changed purchases were reported outside any bridge call,
    /// e.g. a promo code redeemed in the Play Store app.
    PurchasesUpdated(PurchasesData),
}

impl BillingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConnectionLost => EVENT_CONNECTION_LOST,
            Self::PurchasesUpdated(_) => EVENT_PURCHASE_UPDATED,
        }
    }
}
