//! Connection settings for the e-Stat API.
//!
//! Read from the environment:
//!
//! - `ESTAT_APP_ID` (required): application ID issued by e-Stat.
//! - `ESTAT_API_URL` (optional): `getStatsData` endpoint, defaults to
//!   [`DEFAULT_API_URL`].
//! - `ESTAT_LANG` (optional): response language, defaults to `J`.
//! - `ESTAT_STATS_DATA_ID` (optional): overrides the dataset's statistics
//!   table ID.

use std::fmt;
use std::time::Duration;

use crate::FetchError;

/// Default `getStatsData` JSON endpoint.
pub const DEFAULT_API_URL: &str = "https://api.e-stat.go.jp/rest/3.0/app/json/getStatsData";

/// Default response language.
pub const DEFAULT_LANG: &str = "J";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to issue a `getStatsData` request.
#[derive(Clone, PartialEq, Eq)]
pub struct EstatConfig {
    /// Endpoint URL.
    pub api_url: String,
    /// Application ID (secret).
    pub app_id: String,
    /// Statistics table ID (`statsDataId`).
    pub stats_data_id: String,
    /// Response language (`lang`).
    pub lang: String,
}

// Keeps the application ID out of logs.
impl fmt::Debug for EstatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstatConfig")
            .field("api_url", &self.api_url)
            .field("app_id", &"<redacted>")
            .field("stats_data_id", &self.stats_data_id)
            .field("lang", &self.lang)
            .finish()
    }
}

impl EstatConfig {
    /// Creates a config against the default endpoint.
    #[must_use]
    pub fn new(app_id: impl Into<String>, stats_data_id: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            app_id: app_id.into(),
            stats_data_id: stats_data_id.into(),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Builds a config from process environment variables.
    ///
    /// `stats_data_id` is used unless `ESTAT_STATS_DATA_ID` is set.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] if `ESTAT_APP_ID` is missing or empty.
    pub fn from_env(stats_data_id: &str) -> Result<Self, FetchError> {
        Self::from_lookup(stats_data_id, |key| std::env::var(key).ok())
    }

    /// Builds a config using `lookup` to resolve variable names.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] if `ESTAT_APP_ID` is missing or empty.
    pub fn from_lookup<F>(stats_data_id: &str, lookup: F) -> Result<Self, FetchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let app_id = non_empty("ESTAT_APP_ID").ok_or_else(|| FetchError::Config {
            message: "ESTAT_APP_ID environment variable not set".to_string(),
        })?;
        let stats_data_id =
            non_empty("ESTAT_STATS_DATA_ID").unwrap_or_else(|| stats_data_id.to_string());
        if stats_data_id.trim().is_empty() {
            return Err(FetchError::Config {
                message: "No statistics table ID configured".to_string(),
            });
        }

        Ok(Self {
            api_url: non_empty("ESTAT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            app_id,
            stats_data_id,
            lang: non_empty("ESTAT_LANG").unwrap_or_else(|| DEFAULT_LANG.to_string()),
        })
    }

    /// Query parameters for the `getStatsData` request.
    #[must_use]
    pub fn query(&self) -> [(&'static str, &str); 3] {
        [
            ("appId", self.app_id.as_str()),
            ("statsDataId", self.stats_data_id.as_str()),
            ("lang", self.lang.as_str()),
        ]
    }
}
