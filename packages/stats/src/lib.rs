#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! e-Stat statistics fetch and normalization.
//!
//! Issues one `getStatsData` request per [`EstatClient::fetch`] call,
//! validates the response envelope, and reshapes the observations that
//! match a [`CategoryFilter`] into a [`Table`] of map-ready records.
//!
//! Every failure (transport, malformed JSON, API-reported error) is
//! returned as a [`FetchError`]. Nothing is retried or cached; callers that
//! want resilience wrap [`EstatClient::fetch`] themselves.

pub mod client;
pub mod config;
pub mod envelope;
pub mod normalize;
pub mod registry;

pub use client::EstatClient;
pub use config::EstatConfig;
pub use estat_map_stats_models::{CategoryFilter, Record, Table, YearFilter};
pub use normalize::Normalizer;

/// Errors that can occur while fetching a statistics table.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    ///
    /// A transport failure like [`Self::Transport`], kept separate so the
    /// status code survives. Callers treating transport errors as retryable
    /// should match both.
    #[error("HTTP {status}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The body was not JSON or lacked the expected envelope keys.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// What was missing or unparseable.
        message: String,
    },

    /// The API answered but reported a non-success status.
    #[error("API error {code}: {message}")]
    Api {
        /// `RESULT.STATUS` as returned.
        code: String,
        /// `RESULT.ERROR_MSG` as returned.
        message: String,
    },

    /// Required configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedResponse {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_are_malformed_responses() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }

    #[test]
    fn api_error_message_is_verbatim() {
        let err = FetchError::Api {
            code: "100".to_string(),
            message: "認証に失敗しました。".to_string(),
        };
        assert_eq!(err.to_string(), "API error 100: 認証に失敗しました。");
    }
}
