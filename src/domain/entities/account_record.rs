use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use super::{billing_provider::BillingProvider, subscription_status::SubscriptionStatus};

pub const DEFAULT_PLAN: &str = "Standard";
pub const DEFAULT_RENEWAL_DATE_ISO: &str = "2026-03-18";
pub const DEFAULT_PAYMENT: &str = "Visa •••• 4242";

/// The single fake account persisted for the current browser profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub logged_in: bool,
    pub subscription_status: SubscriptionStatus,
    pub billing_provider: BillingProvider,
    pub plan: String,
    #[serde(rename = "renewalDateISO")]
    pub renewal_date_iso: String,
    pub payment: String,
}

impl Default for AccountRecord {
    fn default() -> Self {
        Self {
            logged_in: false,
            subscription_status: SubscriptionStatus::Active,
            billing_provider: BillingProvider::Direct,
            plan: DEFAULT_PLAN.to_string(),
            renewal_date_iso: DEFAULT_RENEWAL_DATE_ISO.to_string(),
            payment: DEFAULT_PAYMENT.to_string(),
        }
    }
}

impl AccountRecord {
    /// Shallow merge: every field present in `patch` replaces the current one.
    pub fn merged(mut self, patch: AccountPatch) -> Self {
        if let Some(logged_in) = patch.logged_in {
            self.logged_in = logged_in;
        }
        if let Some(status) = patch.subscription_status {
            self.subscription_status = status;
        }
        if let Some(provider) = patch.billing_provider {
            self.billing_provider = provider;
        }
        if let Some(plan) = patch.plan {
            self.plan = plan;
        }
        if let Some(renewal) = patch.renewal_date_iso {
            self.renewal_date_iso = renewal;
        }
        if let Some(payment) = patch.payment {
            self.payment = payment;
        }
        self
    }
}

/// A partial record. `None` leaves the field untouched on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_provider: Option<BillingProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(
        default,
        rename = "renewalDateISO",
        skip_serializing_if = "Option::is_none"
    )]
    pub renewal_date_iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
}

impl AccountPatch {
    pub fn logged_in(value: bool) -> Self {
        Self {
            logged_in: Some(value),
            ..Default::default()
        }
    }

    pub fn billing_provider(provider: BillingProvider) -> Self {
        Self {
            billing_provider: Some(provider),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Lenient read of a persisted value.
    ///
    /// Returns `None` unless `raw` is a JSON object. Each known field is taken
    /// only if it has the expected JSON type; unknown keys are dropped.
    pub fn from_stored(raw: &str) -> Option<Self> {
        let Value::Object(map) = serde_json::from_str::<Value>(raw).ok()? else {
            return None;
        };

        Some(Self {
            logged_in: typed_field(&map, "loggedIn"),
            subscription_status: typed_field(&map, "subscriptionStatus"),
            billing_provider: typed_field(&map, "billingProvider"),
            plan: typed_field(&map, "plan"),
            renewal_date_iso: typed_field(&map, "renewalDateISO"),
            payment: typed_field(&map, "payment"),
        })
    }
}

fn typed_field<T: DeserializeOwned>(map: &Map<String, Value>, name: &str) -> Option<T> {
    map.get(name)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}
