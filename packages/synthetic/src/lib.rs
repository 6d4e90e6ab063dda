#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Synthetic prefecture population trends.
//!
//! Stand-in data for when the statistics API is unavailable or disabled.
//! Output uses its own [`SyntheticRecord`] type so it cannot be mixed into
//! a real table by accident.
//!
//! The shape mimics real trends: the capital region grows roughly 0.5 per
//! year, everywhere else shrinks roughly 0.3 per year, with Gaussian noise
//! on top of a random base population (in units of 10,000 people).

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use estat_map_geography_models::ReferenceTable;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::Serialize;

/// Default first year.
pub const DEFAULT_FIRST_YEAR: i32 = 2000;

/// Default last year.
pub const DEFAULT_LAST_YEAR: i32 = 2020;

/// Prefectures covered by default (Hokkaido, Tohoku and Kanto).
pub const DEFAULT_PREFECTURES: &[&str] = &[
    "北海道", "青森", "岩手", "宮城", "秋田", "山形", "福島", "茨城", "栃木", "群馬", "埼玉", "千葉",
    "東京", "神奈川",
];

/// Prefectures that trend upward.
const CAPITAL_REGION: &[&str] = &["埼玉", "千葉", "東京", "神奈川"];

const GROWTH_PER_YEAR: f64 = 0.5;
const DECLINE_PER_YEAR: f64 = 0.3;
/// Standard deviation of the capital region's noise.
const GROWTH_NOISE: f64 = 2.0;
/// Standard deviation of everyone else's noise.
const DECLINE_NOISE: f64 = 1.5;

/// One generated data point. Not real data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticRecord {
    /// Year.
    pub year: i32,
    /// Prefecture short name (e.g. `"東京"`).
    pub prefecture_name: String,
    /// Population in units of 10,000 people.
    pub population: f64,
    /// Trend term added to the base population.
    pub change_rate: f64,
    /// Latitude of the prefectural capital.
    pub latitude: f64,
    /// Longitude of the prefectural capital.
    pub longitude: f64,
}

/// Generates one record per year and prefecture, year-major.
///
/// Names the reference table cannot resolve are skipped.
pub fn generate<R: Rng>(
    rng: &mut R,
    reference: &ReferenceTable,
    years: RangeInclusive<i32>,
    prefectures: &[&str],
) -> Vec<SyntheticRecord> {
    let resolved: Vec<(&str, (f64, f64))> = prefectures
        .iter()
        .filter_map(|name| {
            let coords = reference.coordinates_for(name);
            if coords.is_none() {
                log::warn!("Skipping unknown prefecture {name:?}");
            }
            Some((*name, coords?))
        })
        .collect();

    let first_year = *years.start();
    let mut records = Vec::with_capacity(resolved.len() * years.clone().count());

    for year in years {
        let elapsed = f64::from(year - first_year);
        for &(name, (latitude, longitude)) in &resolved {
            let base = f64::from(rng.random_range(500_i32..1400));
            let noise: f64 = rng.sample(StandardNormal);
            let change_rate = if is_capital_region(name) {
                elapsed.mul_add(GROWTH_PER_YEAR, noise * GROWTH_NOISE)
            } else {
                (-elapsed).mul_add(DECLINE_PER_YEAR, noise * DECLINE_NOISE)
            };

            records.push(SyntheticRecord {
                year,
                prefecture_name: name.to_string(),
                population: base + change_rate,
                change_rate,
                latitude,
                longitude,
            });
        }
    }

    log::debug!("Generated {} synthetic records", records.len());
    records
}

/// Generates the default 2000-2020 series over [`DEFAULT_PREFECTURES`].
pub fn generate_default<R: Rng>(rng: &mut R) -> Vec<SyntheticRecord> {
    generate(
        rng,
        &ReferenceTable::default(),
        DEFAULT_FIRST_YEAR..=DEFAULT_LAST_YEAR,
        DEFAULT_PREFECTURES,
    )
}

/// Rows for one year, largest `change_rate` first.
#[must_use]
pub fn year_view(records: &[SyntheticRecord], year: i32) -> Vec<SyntheticRecord> {
    let mut rows: Vec<SyntheticRecord> = records
        .iter()
        .filter(|r| r.year == year)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.change_rate.total_cmp(&a.change_rate));
    rows
}

/// Every year's [`year_view`], oldest year first.
#[must_use]
pub fn frames(records: &[SyntheticRecord]) -> BTreeMap<i32, Vec<SyntheticRecord>> {
    let mut frames: BTreeMap<i32, Vec<SyntheticRecord>> = BTreeMap::new();
    for record in records {
        frames.entry(record.year).or_default().push(record.clone());
    }
    for rows in frames.values_mut() {
        rows.sort_by(|a, b| b.change_rate.total_cmp(&a.change_rate));
    }
    frames
}

fn is_capital_region(name: &str) -> bool {
    let short = name
        .strip_suffix('都')
        .or_else(|| name.strip_suffix('県'))
        .unwrap_or(name);
    CAPITAL_REGION.contains(&short)
}
