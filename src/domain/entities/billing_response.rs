use std::fmt;

use serde::Serialize;

/// Response code returned by the Play Billing client with every result.
///
/// https://developer.android.com/reference/com/android/billingclient/api/BillingClient.BillingResponseCode
///
/// The client reports raw integers; codes outside the documented set are
/// preserved in the `Unknown` variant rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingResponse {
    Ok,
    UserCanceled,
    ServiceUnavailable,
    ServiceDisconnected,
    ItemUnavailable,
    ItemNotOwned,
    ItemAlreadyOwned,
    FeatureNotSupported,
    Error,
    DeveloperError,
    BillingUnavailable,
    Unknown(i32),
}

impl BillingResponse {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::UserCanceled,
            2 => Self::ServiceUnavailable,
            -1 => Self::ServiceDisconnected,
            4 => Self::ItemUnavailable,
            8 => Self::ItemNotOwned,
            7 => Self::ItemAlreadyOwned,
            -2 => Self::FeatureNotSupported,
            6 => Self::Error,
            5 => Self::DeveloperError,
            3 => Self::BillingUnavailable,
            other => Self::Unknown(other),
        }
    }

    /// Fixed text label for cross-boundary transfer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::UserCanceled => "USER_CANCELED",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::ServiceDisconnected => "SERVICE_DISCONNECTED",
            Self::ItemUnavailable => "ITEM_UNAVAILABLE",
            Self::ItemNotOwned => "ITEM_NOT_OWNED",
            Self::ItemAlreadyOwned => "ITEM_ALREADY_OWNED",
            Self::FeatureNotSupported => "FEATURE_NOT_SUPPORTED",
            Self::Error => "ERROR",
            Self::DeveloperError => "DEVELOPER_ERROR",
            Self::BillingUnavailable => "BILLING_UNAVAILABLE",
            Self::Unknown(_) => "UNKNOWN_BILLING_RESPONSE",
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == Self::Ok
    }
}

/// Label text of the given raw billing response code.
pub fn billing_response_to_string(code: i32) -> &'static str {
    BillingResponse::from_code(code).label()
}

impl fmt::Display for BillingResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for BillingResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
