//! Observation filtering and reshaping.
//!
//! Turns validated observations into [`Record`]s:
//!
//! 1. keep observations whose three category codes all equal the filter's,
//! 2. apply the optional [`YearFilter`],
//! 3. join the area code against the [`ReferenceTable`], dropping the
//!    nationwide aggregate and unknown codes,
//! 4. parse the value as an integer, defaulting to zero.
//!
//! Payload order is preserved and duplicates are kept.

use std::sync::LazyLock;

use estat_map_geography_models::ReferenceTable;
use estat_map_stats_models::{CategoryFilter, Record, Table, YearFilter};
use regex::Regex;

use crate::envelope::Observation;

/// An optionally signed integer, with commas only as thousands separators.
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)$").expect("valid regex")
});

/// Reshapes raw observations using a borrowed reference table.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    reference: &'a ReferenceTable,
}

impl<'a> Normalizer<'a> {
    /// Creates a normalizer that joins against `reference`.
    #[must_use]
    pub const fn new(reference: &'a ReferenceTable) -> Self {
        Self { reference }
    }

    /// Filters and reshapes observations into a table.
    #[must_use]
    pub fn normalize(
        &self,
        observations: &[Observation],
        filter: &CategoryFilter,
        year_filter: Option<YearFilter>,
    ) -> Table {
        let mut unmatched = 0usize;
        let mut year_excluded = 0usize;
        let mut unjoined = 0usize;

        let table: Table = observations
            .iter()
            .filter(|obs| {
                let keep = filter.matches(&obs.cat01, &obs.cat02, &obs.cat03);
                if !keep {
                    unmatched += 1;
                }
                keep
            })
            .filter_map(|obs| {
                let Some(year) = resolve_year(obs.time.as_deref(), year_filter) else {
                    year_excluded += 1;
                    return None;
                };
                let Some(record) = self.join(obs, year) else {
                    unjoined += 1;
                    return None;
                };
                Some(record)
            })
            .collect();

        log::debug!(
            "Normalized {} of {} observations ({unmatched} filtered by category, \
             {year_excluded} by year, {unjoined} without a prefecture)",
            table.len(),
            observations.len(),
        );

        table
    }

    /// Joins one observation against the reference table.
    fn join(&self, obs: &Observation, year: Option<i32>) -> Option<Record> {
        let prefecture = self.reference.prefecture_for_area_code(&obs.area)?;
        let (latitude, longitude) = self.reference.coordinates_for(prefecture.name)?;

        Some(Record {
            prefecture_name: prefecture.name.to_string(),
            value: parse_value(obs.value.as_ref()),
            latitude,
            longitude,
            year,
        })
    }
}

/// Decides whether an observation survives the year filter and which year
/// to attach.
///
/// The outer `Option` is the keep/drop decision; the inner one is the
/// record's `year`.
#[allow(clippy::option_option)]
fn resolve_year(time_code: Option<&str>, year_filter: Option<YearFilter>) -> Option<Option<i32>> {
    match year_filter {
        None => Some(None),
        Some(YearFilter::All) => Some(time_code.and_then(parse_year)),
        Some(YearFilter::Only(wanted)) => {
            let year = time_code.and_then(parse_year)?;
            (year == wanted).then_some(Some(year))
        }
    }
}

/// Parses the year from the first four characters of a time code
/// (`"2020001011"` -> `2020`).
///
/// Returns `None` if the code is shorter than four characters or they are
/// not all ASCII digits.
#[must_use]
pub fn parse_year(time_code: &str) -> Option<i32> {
    let prefix = time_code.get(..4)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Parses an observation value as an integer.
///
/// Accepts JSON integers and integer strings. Surrounding whitespace is
/// tolerated, and commas only when they group thousands (`"1,234"`, not
/// `"1,2,3"`). Anything else, including the API's `"-"` and `"***"`
/// placeholders, yields zero.
#[must_use]
pub fn parse_value(value: Option<&serde_json::Value>) -> i64 {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            if !INTEGER_RE.is_match(s) {
                return 0;
            }
            s.replace(',', "").parse().unwrap_or(0)
        }
        _ => 0,
    }
}
