use serde::{Deserialize, Serialize};

/// Who charges the user: Mockflix directly or a third-party storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum BillingProvider {
    #[default]
    Direct,
    Apple,
    Google,
    Partner,
    /// A stored value outside the allow-list, kept as written.
    Unrecognized(String),
}

impl BillingProvider {
    pub fn as_str(&self) -> &str {
        match self {
            BillingProvider::Direct => "direct",
            BillingProvider::Apple => "apple",
            BillingProvider::Google => "google",
            BillingProvider::Partner => "partner",
            BillingProvider::Unrecognized(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::parse_allowed(s).unwrap_or_else(|| BillingProvider::Unrecognized(s.to_string()))
    }

    /// Exact, case-sensitive match against the allow-list.
    pub fn parse_allowed(s: &str) -> Option<Self> {
        match s {
            "direct" => Some(BillingProvider::Direct),
            "apple" => Some(BillingProvider::Apple),
            "google" => Some(BillingProvider::Google),
            "partner" => Some(BillingProvider::Partner),
            _ => None,
        }
    }

    /// Whether the stored payment string is shown instead of a storefront phrase
    pub fn is_direct(&self) -> bool {
        matches!(self, BillingProvider::Direct)
    }

    /// All allow-listed providers
    pub fn all() -> &'static [BillingProvider] {
        &[
            BillingProvider::Direct,
            BillingProvider::Apple,
            BillingProvider::Google,
            BillingProvider::Partner,
        ]
    }
}

impl From<String> for BillingProvider {
    fn from(value: String) -> Self {
        BillingProvider::from_str(&value)
    }
}

impl From<BillingProvider> for String {
    fn from(value: BillingProvider) -> Self {
        match value {
            BillingProvider::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for BillingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
