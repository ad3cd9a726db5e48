use url::Url;

use crate::app_error::{AppError, AppResult};

const BASE: &str = "http://mockflix.local/";

/// Page path plus decoded query pairs, parsed from a relative page URL such as
/// `membership.html?provider=apple&test=1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub path: String,
    pairs: Vec<(String, String)>,
}

impl PageLocation {
    pub fn parse(input: &str) -> AppResult<Self> {
        let base = Url::parse(BASE).map_err(|e| AppError::Internal(e.to_string()))?;
        let url = base
            .join(input.trim())
            .map_err(|e| AppError::InvalidInput(format!("bad page url {input:?}: {e}")))?;

        Ok(Self {
            path: url.path().trim_start_matches('/').to_string(),
            pairs: url.query_pairs().into_owned().collect(),
        })
    }

    /// First value for `name`, like `URLSearchParams.get`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_test_mode(&self) -> bool {
        self.get("test") == Some("1")
    }
}
