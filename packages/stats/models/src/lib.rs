#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Category filters and normalized record types for prefecture statistics.
//!
//! The migration dataset classifies every observation along three
//! dimensions (`cat01` entry/exit, `cat02` sex, `cat03` nationality).
//! A [`CategoryFilter`] picks one value from each to select a single
//! statistical series, and the normalizer turns the matching observations
//! into [`Record`]s.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Whether the series counts arrivals or departures (`cat01`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum EntryOrExit {
    /// 入国
    #[serde(rename = "001")]
    #[strum(to_string = "entry", serialize = "001")]
    Entry,
    /// 出国
    #[serde(rename = "002")]
    #[strum(to_string = "exit", serialize = "002")]
    Exit,
}

impl EntryOrExit {
    /// Wire code used by the statistics API.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Entry => "001",
            Self::Exit => "002",
        }
    }

    /// Japanese display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entry => "入国",
            Self::Exit => "出国",
        }
    }
}

/// Sex breakdown of the series (`cat02`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Sex {
    /// 総数
    #[serde(rename = "000")]
    #[strum(to_string = "total", serialize = "000")]
    Total,
    /// 男
    #[serde(rename = "001")]
    #[strum(to_string = "male", serialize = "001")]
    Male,
    /// 女
    #[serde(rename = "002")]
    #[strum(to_string = "female", serialize = "002")]
    Female,
}

impl Sex {
    /// Wire code used by the statistics API.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Total => "000",
            Self::Male => "001",
            Self::Female => "002",
        }
    }

    /// Japanese display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "総数",
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

/// Nationality of the counted travellers (`cat03`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Nationality {
    /// 日本人
    #[serde(rename = "001")]
    #[strum(to_string = "japanese", serialize = "001")]
    Japanese,
    /// 外国人
    #[serde(rename = "002")]
    #[strum(to_string = "foreign", serialize = "002")]
    Foreign,
}

impl Nationality {
    /// Wire code used by the statistics API.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Japanese => "001",
            Self::Foreign => "002",
        }
    }

    /// Japanese display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Japanese => "日本人",
            Self::Foreign => "外国人",
        }
    }
}

/// Selects one statistical series out of the raw payload.
///
/// An observation is retained only when all three category codes match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    /// `cat01`
    pub entry_or_exit: EntryOrExit,
    /// `cat02`
    pub sex: Sex,
    /// `cat03`
    pub nationality: Nationality,
}

impl CategoryFilter {
    /// Creates a filter from its three dimensions.
    #[must_use]
    pub const fn new(entry_or_exit: EntryOrExit, sex: Sex, nationality: Nationality) -> Self {
        Self {
            entry_or_exit,
            sex,
            nationality,
        }
    }

    /// Returns `true` if the three raw category codes equal this filter's
    /// codes exactly.
    #[must_use]
    pub fn matches(&self, cat01: &str, cat02: &str, cat03: &str) -> bool {
        cat01 == self.entry_or_exit.code()
            && cat02 == self.sex.code()
            && cat03 == self.nationality.code()
    }

    /// Human-readable label (e.g. `"入国 / 総数 / 外国人"`).
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} / {} / {}",
            self.entry_or_exit.label(),
            self.sex.label(),
            self.nationality.label()
        )
    }
}

impl Default for CategoryFilter {
    /// Foreign arrivals, both sexes: the series the dashboards open with.
    fn default() -> Self {
        Self::new(EntryOrExit::Entry, Sex::Total, Nationality::Foreign)
    }
}

/// How the normalizer treats the observation's time code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YearFilter {
    /// Keep every year and attach the parsed year to each record.
    All,
    /// Keep only observations from this year.
    Only(i32),
}

/// A normalized, map-ready row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Prefecture display name with suffix (e.g. `"東京都"`).
    pub prefecture_name: String,
    /// Observed value. Zero when the payload value was missing or not an
    /// integer.
    pub value: i64,
    /// Latitude of the prefectural capital.
    pub latitude: f64,
    /// Longitude of the prefectural capital.
    pub longitude: f64,
    /// Year parsed from the time code, when a year filter was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// An ordered sequence of records in payload order.
pub type Table = Vec<Record>;

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn codes_are_three_digits() {
        for v in EntryOrExit::iter() {
            assert_eq!(v.code().len(), 3);
        }
        for v in Sex::iter() {
            assert_eq!(v.code().len(), 3);
        }
        for v in Nationality::iter() {
            assert_eq!(v.code().len(), 3);
        }
    }

    #[test]
    fn parses_keyword_or_code() {
        assert_eq!(EntryOrExit::from_str("entry").unwrap(), EntryOrExit::Entry);
        assert_eq!(EntryOrExit::from_str("002").unwrap(), EntryOrExit::Exit);
        assert_eq!(Sex::from_str("000").unwrap(), Sex::Total);
        assert_eq!(Sex::from_str("Female").unwrap(), Sex::Female);
        assert_eq!(
            Nationality::from_str("FOREIGN").unwrap(),
            Nationality::Foreign
        );
        assert!(Nationality::from_str("003").is_err());
    }

    #[test]
    fn displays_keyword() {
        assert_eq!(EntryOrExit::Exit.to_string(), "exit");
        assert_eq!(Sex::Male.to_string(), "male");
        assert_eq!(Nationality::Japanese.to_string(), "japanese");
    }

    #[test]
    fn filter_matches_all_three() {
        let filter = CategoryFilter::new(EntryOrExit::Entry, Sex::Total, Nationality::Japanese);
        assert!(filter.matches("001", "000", "001"));
        assert!(!filter.matches("002", "000", "001"));
        assert!(!filter.matches("001", "001", "001"));
        assert!(!filter.matches("001", "000", "002"));
        assert!(!filter.matches("", "", ""));
    }

    #[test]
    fn filter_serializes_as_codes() {
        let json = serde_json::to_value(CategoryFilter::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "entryOrExit": "001",
                "sex": "000",
                "nationality": "002"
            })
        );
    }

    #[test]
    fn filter_label() {
        assert_eq!(CategoryFilter::default().label(), "入国 / 総数 / 外国人");
    }

    #[test]
    fn record_omits_missing_year() {
        let record = Record {
            prefecture_name: "東京都".to_string(),
            value: 12_345,
            latitude: 35.68,
            longitude: 139.76,
            year: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("year").is_none());
        assert_eq!(json["prefectureName"], "東京都");
        assert_eq!(json["value"], 12_345);
    }
}
