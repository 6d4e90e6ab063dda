#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Descriptive statistics over normalized prefecture tables.
//!
//! The normalizer never sorts or aggregates; everything a dashboard shows
//! beyond the raw rows (totals, the top prefecture, rankings, per-year
//! animation frames) is computed here from a [`Table`].

pub mod frames;

use estat_map_stats_models::{Record, Table};
use serde::Serialize;

pub use frames::{by_year, year_range};

/// Count, total, mean and maximum of a table's values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    /// Number of records.
    pub count: usize,
    /// Sum of all values.
    pub total: i64,
    /// Mean value, `None` for an empty table.
    pub mean: Option<f64>,
    /// Record with the largest value; the first one wins on ties.
    pub max: Option<Record>,
}

/// Computes count, total, mean and maximum.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(table: &[Record]) -> TableSummary {
    let total: i64 = table.iter().map(|r| r.value).sum();
    let max = table
        .iter()
        .fold(None::<&Record>, |best, r| match best {
            Some(b) if b.value >= r.value => Some(b),
            _ => Some(r),
        })
        .cloned();
    let mean = (!table.is_empty()).then(|| total as f64 / table.len() as f64);

    TableSummary {
        count: table.len(),
        total,
        mean,
        max,
    }
}

/// Returns the records sorted by value, largest first.
///
/// The sort is stable, so equal values keep payload order.
#[must_use]
pub fn ranked(table: &[Record]) -> Table {
    let mut sorted = table.to_vec();
    sorted.sort_by(|a, b| b.value.cmp(&a.value));
    sorted
}

/// Returns the `n` largest records.
#[must_use]
pub fn top(table: &[Record], n: usize) -> Table {
    let mut sorted = ranked(table);
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, value: i64) -> Record {
        Record {
            prefecture_name: name.to_string(),
            value,
            latitude: 35.0,
            longitude: 139.0,
            year: None,
        }
    }

    #[test]
    fn summarizes_values() {
        let table = vec![
            record("東京都", 300),
            record("大阪府", 100),
            record("愛知県", 200),
        ];
        let summary = summarize(&table);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, 600);
        assert_eq!(summary.mean, Some(200.0));
        assert_eq!(summary.max.unwrap().prefecture_name, "東京都");
    }

    #[test]
    fn empty_table_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.max, None);
    }

    #[test]
    fn max_ties_keep_first() {
        let table = vec![record("東京都", 5), record("大阪府", 5)];
        assert_eq!(summarize(&table).max.unwrap().prefecture_name, "東京都");
    }

    #[test]
    fn ranks_descending_and_stable() {
        let table = vec![
            record("北海道", 10),
            record("東京都", 30),
            record("大阪府", 10),
            record("福岡県", 20),
        ];
        let names: Vec<String> = ranked(&table)
            .into_iter()
            .map(|r| r.prefecture_name)
            .collect();
        assert_eq!(names, vec!["東京都", "福岡県", "北海道", "大阪府"]);
    }

    #[test]
    fn top_truncates() {
        let table = vec![record("北海道", 10), record("東京都", 30)];
        assert_eq!(top(&table, 1).len(), 1);
        assert_eq!(top(&table, 1)[0].prefecture_name, "東京都");
        assert_eq!(top(&table, 5).len(), 2);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let json = serde_json::to_value(summarize(&[record("東京都", 1)])).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["max"]["prefectureName"], "東京都");
    }
}
