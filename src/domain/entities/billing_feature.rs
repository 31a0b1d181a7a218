/// Feature names recognized by `is_feature_supported`.
///
/// https://developer.android.com/reference/com/android/billingclient/api/BillingClient.FeatureType
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingFeature {
    /// Purchase/query support for subscriptions.
    Subscriptions,
    /// Launch a subscription-upgrade/downgrade flow.
    SubscriptionsUpdate,
}

pub const FEATURE_SUBSCRIPTIONS: &str = "SUBSCRIPTIONS";
pub const FEATURE_SUBSCRIPTIONS_UPDATE: &str = "SUBSCRIPTIONS_UPDATE";

impl BillingFeature {
    /// Bridge-facing feature name to feature, `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            FEATURE_SUBSCRIPTIONS => Some(Self::Subscriptions),
            FEATURE_SUBSCRIPTIONS_UPDATE => Some(Self::SubscriptionsUpdate),
            _ => None,
        }
    }

    /// The billing client's own feature-type string.
    pub fn feature_type(&self) -> &'static str {
        match self {
            Self::Subscriptions => "subscriptions",
            Self::SubscriptionsUpdate => "subscriptionsUpdate",
        }
    }
}
