//! e-Stat `getStatsData` client.
//!
//! One [`EstatClient::fetch`] call is exactly one GET request. Responses are
//! not cached, so repeated calls with the same filter re-download and
//! re-parse the full table.

use estat_map_geography_models::ReferenceTable;
use estat_map_stats_models::{CategoryFilter, Table, YearFilter};

use crate::FetchError;
use crate::config::{EstatConfig, REQUEST_TIMEOUT};
use crate::envelope::StatsPayload;
use crate::normalize::Normalizer;

/// Fetches statistics tables and normalizes them against a reference table.
#[derive(Debug, Clone)]
pub struct EstatClient {
    client: reqwest::Client,
    config: EstatConfig,
    reference: ReferenceTable,
}

impl EstatClient {
    /// Creates a client with the compiled-in prefecture table.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: EstatConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, config, ReferenceTable::default()))
    }

    /// Creates a client from its parts.
    #[must_use]
    pub const fn with_client(
        client: reqwest::Client,
        config: EstatConfig,
        reference: ReferenceTable,
    ) -> Self {
        Self {
            client,
            config,
            reference,
        }
    }

    /// Downloads the raw response body.
    async fn fetch_body(&self) -> Result<String, FetchError> {
        log::info!(
            "Fetching e-Stat table {} from {}",
            self.config.stats_data_id,
            self.config.api_url
        );

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&self.config.query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("e-Stat request failed with HTTP {status}");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        log::debug!("Received {} bytes", body.len());
        Ok(body)
    }

    /// Fetches the configured table and returns the records matching
    /// `filter`.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Transport`] if the request fails or the body cannot
    ///   be read.
    /// * [`FetchError::HttpStatus`] if the server answers with a non-2xx
    ///   status.
    /// * [`FetchError::MalformedResponse`] if the body is not the expected
    ///   envelope.
    /// * [`FetchError::Api`] if the API reports a non-success status.
    pub async fn fetch(
        &self,
        filter: &CategoryFilter,
        year_filter: Option<YearFilter>,
    ) -> Result<Table, FetchError> {
        let payload = StatsPayload::from_body(&self.fetch_body().await?)?;
        let table =
            Normalizer::new(&self.reference).normalize(&payload.observations, filter, year_filter);

        log::info!(
            "{} records for {} ({})",
            table.len(),
            filter.label(),
            payload.title.as_deref().unwrap_or(&self.config.stats_data_id)
        );

        Ok(table)
    }
}
