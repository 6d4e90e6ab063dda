//! Typed `getStatsData` response envelope.
//!
//! ```text
//! { "GET_STATS_DATA": {
//!     "RESULT": { "STATUS": 0, "ERROR_MSG": "..." },
//!     "STATISTICAL_DATA": {
//!       "TABLE_INF": { "TITLE": ... },
//!       "CLASS_INF": { ... },
//!       "DATA_INF": { "VALUE": Observation | [Observation] } } } }
//! ```
//!
//! Every level is deserialized as optional so that a missing key becomes a
//! [`FetchError::MalformedResponse`] naming the key, rather than a generic
//! serde message. [`StatsPayload::from_envelope`] validates the shape once
//! and hands back plain observations.

use serde::Deserialize;

use crate::FetchError;

/// `RESULT.STATUS` value that means success.
pub const SUCCESS_STATUS: &str = "0";

/// Top-level response document.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Payload wrapper.
    #[serde(rename = "GET_STATS_DATA")]
    pub get_stats_data: Option<GetStatsData>,
}

/// Contents of `GET_STATS_DATA`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetStatsData {
    /// Status block.
    #[serde(rename = "RESULT")]
    pub result: Option<ApiResult>,
    /// Data block (absent on most errors).
    #[serde(rename = "STATISTICAL_DATA")]
    pub statistical_data: Option<StatisticalData>,
}

/// `RESULT` block.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResult {
    /// Status code, `0` on success.
    #[serde(rename = "STATUS")]
    pub status: Option<StatusCode>,
    /// Human-readable status message.
    #[serde(rename = "ERROR_MSG", default)]
    pub error_msg: Option<String>,
}

/// `RESULT.STATUS`, which the API sends as a number but older clients and
/// fixtures send as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    /// `"STATUS": 0`
    Number(i64),
    /// `"STATUS": "0"`
    Text(String),
}

impl StatusCode {
    /// Status as a string, for comparison with [`SUCCESS_STATUS`].
    #[must_use]
    pub fn as_code(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }
}

/// `STATISTICAL_DATA` block.
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticalData {
    /// Table metadata.
    #[serde(rename = "TABLE_INF", default)]
    pub table_inf: Option<TableInf>,
    /// Observations.
    #[serde(rename = "DATA_INF")]
    pub data_inf: Option<DataInf>,
}

/// `TABLE_INF` block. Only the title is used.
#[derive(Debug, Clone, Deserialize)]
pub struct TableInf {
    /// Either a plain string or `{ "@no": ..., "$": ... }`.
    #[serde(rename = "TITLE", default)]
    pub title: Option<serde_json::Value>,
}

impl TableInf {
    /// Table title text, if present in either shape.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self.title.as_ref()? {
            serde_json::Value::String(s) => Some(s.as_str()),
            other => other.get("$").and_then(serde_json::Value::as_str),
        }
    }
}

/// `DATA_INF` block.
#[derive(Debug, Clone, Deserialize)]
pub struct DataInf {
    /// One observation or an array of them.
    #[serde(rename = "VALUE")]
    pub value: Option<OneOrMany<Observation>>,
}

/// A JSON value that is either a single item or an array of items.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// `[ {...}, {...} ]`
    Many(Vec<T>),
    /// `{...}`
    One(T),
}

impl<T> OneOrMany<T> {
    /// Flattens into a vector, wrapping a single item.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// One raw data point.
///
/// Category attributes that are missing deserialize to empty strings and
/// therefore never match a filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Observation {
    /// Table item code.
    #[serde(rename = "@tab", default)]
    pub tab: Option<String>,
    /// Entry/exit code.
    #[serde(rename = "@cat01", default)]
    pub cat01: String,
    /// Sex code.
    #[serde(rename = "@cat02", default)]
    pub cat02: String,
    /// Nationality code.
    #[serde(rename = "@cat03", default)]
    pub cat03: String,
    /// Five-digit area code.
    #[serde(rename = "@area", default)]
    pub area: String,
    /// Time code; the first four characters are the year.
    #[serde(rename = "@time", default)]
    pub time: Option<String>,
    /// Unit label (e.g. `"人"`).
    #[serde(rename = "@unit", default)]
    pub unit: Option<String>,
    /// Value, usually a numeric string; may be `"-"` or absent.
    #[serde(rename = "$", default)]
    pub value: Option<serde_json::Value>,
}

/// A validated, successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsPayload {
    /// Table title, if the response carried one.
    pub title: Option<String>,
    /// Observations in payload order.
    pub observations: Vec<Observation>,
}

impl StatsPayload {
    /// Parses and validates a raw response body.
    ///
    /// # Errors
    ///
    /// * [`FetchError::MalformedResponse`] if the body is not JSON or an
    ///   expected key is missing.
    /// * [`FetchError::Api`] if `RESULT.STATUS` is not [`SUCCESS_STATUS`].
    pub fn from_body(body: &str) -> Result<Self, FetchError> {
        Self::from_value(serde_json::from_str(body)?)
    }

    /// Parses and validates an already-decoded JSON document.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_body`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, FetchError> {
        let envelope: Envelope = serde_json::from_value(value)?;
        Self::from_envelope(envelope)
    }

    /// Validates the envelope's status and shape.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_body`].
    pub fn from_envelope(envelope: Envelope) -> Result<Self, FetchError> {
        let data = envelope.get_stats_data.ok_or_else(|| missing("GET_STATS_DATA"))?;
        let result = data.result.ok_or_else(|| missing("GET_STATS_DATA.RESULT"))?;
        let status = result
            .status
            .ok_or_else(|| missing("GET_STATS_DATA.RESULT.STATUS"))?
            .as_code();

        if status != SUCCESS_STATUS {
            let message = result.error_msg.unwrap_or_default();
            log::warn!("e-Stat returned status {status}: {message}");
            return Err(FetchError::Api {
                code: status,
                message,
            });
        }

        let statistical = data
            .statistical_data
            .ok_or_else(|| missing("GET_STATS_DATA.STATISTICAL_DATA"))?;
        let title = statistical
            .table_inf
            .as_ref()
            .and_then(TableInf::title)
            .map(String::from);
        let observations = statistical
            .data_inf
            .ok_or_else(|| missing("STATISTICAL_DATA.DATA_INF"))?
            .value
            .ok_or_else(|| missing("STATISTICAL_DATA.DATA_INF.VALUE"))?
            .into_vec();

        log::debug!(
            "Parsed {} observations from table {:?}",
            observations.len(),
            title.as_deref().unwrap_or("<untitled>")
        );

        Ok(Self {
            title,
            observations,
        })
    }
}

fn missing(key: &str) -> FetchError {
    FetchError::MalformedResponse {
        message: format!("missing {key}"),
    }
}
