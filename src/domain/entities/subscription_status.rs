use serde::{Deserialize, Serialize};

/// Subscription lifecycle as shown on the membership page.
///
/// Stored values are never validated: anything outside the known set is kept
/// verbatim in `Unrecognized` and written back unchanged on the next save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Paused,
    Cancelled,
    Unrecognized(String),
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Paused => "paused",
            SubscriptionStatus::Cancelled => "cancelled",
            SubscriptionStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => SubscriptionStatus::Active,
            "paused" => SubscriptionStatus::Paused,
            "cancelled" => SubscriptionStatus::Cancelled,
            other => SubscriptionStatus::Unrecognized(other.to_string()),
        }
    }

    /// Lead-in for the status line, or `None` when the value has no wording.
    pub fn status_phrase(&self) -> Option<&'static str> {
        match self {
            SubscriptionStatus::Active => Some("Renews on"),
            SubscriptionStatus::Paused => Some("Paused until"),
            SubscriptionStatus::Cancelled => Some("Active until"),
            SubscriptionStatus::Unrecognized(_) => None,
        }
    }
}

impl From<String> for SubscriptionStatus {
    fn from(value: String) -> Self {
        SubscriptionStatus::from_str(&value)
    }
}

impl From<SubscriptionStatus> for String {
    fn from(value: SubscriptionStatus) -> Self {
        match value {
            SubscriptionStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
