//! Per-year grouping for animated maps.

use std::collections::BTreeMap;

use estat_map_stats_models::Record;

/// Groups records by year, oldest first.
///
/// Records without a year are skipped. Within a year, payload order is
/// kept.
#[must_use]
pub fn by_year(table: &[Record]) -> BTreeMap<i32, Vec<Record>> {
    let mut frames: BTreeMap<i32, Vec<Record>> = BTreeMap::new();
    let mut undated = 0usize;

    for record in table {
        match record.year {
            Some(year) => frames.entry(year).or_default().push(record.clone()),
            None => undated += 1,
        }
    }

    if undated > 0 {
        log::debug!("Skipped {undated} records without a year");
    }

    frames
}

/// Earliest and latest year present in the table.
#[must_use]
pub fn year_range(table: &[Record]) -> Option<(i32, i32)> {
    let mut years = table.iter().filter_map(|r| r.year);
    let first = years.next()?;
    Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, year: Option<i32>) -> Record {
        Record {
            prefecture_name: name.to_string(),
            value: 1,
            latitude: 35.0,
            longitude: 139.0,
            year,
        }
    }

    #[test]
    fn groups_by_year_in_order() {
        let table = vec![
            record("東京都", Some(2021)),
            record("大阪府", Some(2020)),
            record("北海道", None),
            record("福岡県", Some(2020)),
        ];
        let frames = by_year(&table);
        let years: Vec<i32> = frames.keys().copied().collect();
        assert_eq!(years, vec![2020, 2021]);
        let names: Vec<&str> = frames[&2020]
            .iter()
            .map(|r| r.prefecture_name.as_str())
            .collect();
        assert_eq!(names, vec!["大阪府", "福岡県"]);
    }

    #[test]
    fn year_range_ignores_undated() {
        let table = vec![
            record("東京都", Some(2005)),
            record("北海道", None),
            record("大阪府", Some(2001)),
            record("福岡県", Some(2020)),
        ];
        assert_eq!(year_range(&table), Some((2001, 2020)));
        assert_eq!(year_range(&[record("北海道", None)]), None);
        assert_eq!(year_range(&[]), None);
    }
}
