#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Prefecture reference table for Japanese regional statistics.
//!
//! Maps the statistics API's area codes to prefecture display names, and
//! display names to map coordinates. The data is compiled in and never
//! mutated; callers hold a [`ReferenceTable`] and pass it to whatever needs
//! to join raw observations against geography.

pub mod prefecture;

use serde::Serialize;

pub use prefecture::{NATIONWIDE_AREA_CODE, PREFECTURE_COUNT, PREFECTURES};

/// A single prefecture with its map anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefecture {
    /// Five-digit statistics area code (e.g. `"13000"`).
    pub area_code: &'static str,
    /// Display name with administrative suffix (e.g. `"東京都"`).
    pub name: &'static str,
    /// Display name without the suffix (e.g. `"東京"`).
    pub short_name: &'static str,
    /// Latitude of the prefectural capital (WGS84).
    pub latitude: f64,
    /// Longitude of the prefectural capital (WGS84).
    pub longitude: f64,
}

impl Prefecture {
    /// Returns `(latitude, longitude)`.
    #[must_use]
    pub const fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Lookup table over a fixed set of prefectures.
///
/// The [`Default`] table is the compiled-in list of all 47 prefectures.
/// Tests and alternate deployments can build one over any `'static` slice.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable {
    entries: &'static [Prefecture],
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::new(&PREFECTURES)
    }
}

impl ReferenceTable {
    /// Creates a table over the given entries.
    #[must_use]
    pub const fn new(entries: &'static [Prefecture]) -> Self {
        Self { entries }
    }

    /// All entries in table order.
    #[must_use]
    pub const fn all(&self) -> &'static [Prefecture] {
        self.entries
    }

    /// Returns the full entry for an area code.
    ///
    /// The nationwide aggregate code never resolves, even if a custom table
    /// happens to contain it.
    #[must_use]
    pub fn prefecture_for_area_code(&self, area_code: &str) -> Option<&'static Prefecture> {
        if area_code == NATIONWIDE_AREA_CODE {
            return None;
        }
        self.entries.iter().find(|p| p.area_code == area_code)
    }

    /// Returns the display name for an area code.
    #[must_use]
    pub fn name_for_area_code(&self, area_code: &str) -> Option<&'static str> {
        self.prefecture_for_area_code(area_code).map(|p| p.name)
    }

    /// Returns `(latitude, longitude)` for a prefecture display name, with or
    /// without its administrative suffix.
    #[must_use]
    pub fn coordinates_for(&self, name: &str) -> Option<(f64, f64)> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|p| p.name == name || p.short_name == name)
            .map(Prefecture::coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TINY: [Prefecture; 2] = [
        Prefecture {
            area_code: "00000",
            name: "全国",
            short_name: "全国",
            latitude: 36.0,
            longitude: 138.0,
        },
        Prefecture {
            area_code: "99000",
            name: "テスト県",
            short_name: "テスト",
            latitude: 1.0,
            longitude: 2.0,
        },
    ];

    #[test]
    fn default_table_has_all_prefectures() {
        assert_eq!(ReferenceTable::default().all().len(), PREFECTURE_COUNT);
    }

    #[test]
    fn name_for_tokyo() {
        let table = ReferenceTable::default();
        assert_eq!(table.name_for_area_code("13000"), Some("東京都"));
    }

    #[test]
    fn name_for_nationwide_and_unknown() {
        let table = ReferenceTable::default();
        assert_eq!(table.name_for_area_code("00000"), None);
        assert_eq!(table.name_for_area_code("99999"), None);
    }

    #[test]
    fn unknown_area_codes() {
        let table = ReferenceTable::default();
        assert!(table.prefecture_for_area_code(NATIONWIDE_AREA_CODE).is_none());
        assert!(table.prefecture_for_area_code("48000").is_none());
        assert!(table.prefecture_for_area_code("13100").is_none());
        assert!(table.prefecture_for_area_code("").is_none());
        assert_eq!(
            table.prefecture_for_area_code("47000").map(|p| p.name),
            Some("沖縄県")
        );
    }

    #[test]
    fn coordinates_by_full_or_short_name() {
        let table = ReferenceTable::default();
        assert_eq!(table.coordinates_for("北海道"), Some((43.06, 141.35)));
        assert_eq!(table.coordinates_for(" 大阪府 "), Some((34.69, 135.52)));
        assert_eq!(table.coordinates_for("Tokyo"), None);
    }

    #[test]
    fn coordinates_for_tokyo() {
        let table = ReferenceTable::default();
        assert_eq!(table.coordinates_for("東京都"), Some((35.68, 139.76)));
        assert_eq!(table.coordinates_for("東京"), Some((35.68, 139.76)));
        assert_eq!(table.coordinates_for("全国"), None);
    }

    #[test]
    fn custom_table_still_rejects_nationwide() {
        let table = ReferenceTable::new(&TINY);
        assert_eq!(table.name_for_area_code("00000"), None);
        assert_eq!(table.name_for_area_code("99000"), Some("テスト県"));
        assert_eq!(table.name_for_area_code("13000"), None);
        assert_eq!(table.coordinates_for("テスト"), Some((1.0, 2.0)));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(PREFECTURES[12]).unwrap();
        assert_eq!(json["areaCode"], "13000");
        assert_eq!(json["shortName"], "東京");
    }
}
