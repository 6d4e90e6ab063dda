//! Plain-text rendering of tables and summaries.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use estat_map_analytics::TableSummary;
use estat_map_geography_models::Prefecture;
use estat_map_stats_models::Record;
use estat_map_synthetic::SyntheticRecord;

/// One line per record: rank, name, value, coordinates and year.
#[must_use]
pub fn records(table: &[Record]) -> String {
    let mut out = String::new();
    for (i, r) in table.iter().enumerate() {
        let year = r.year.map_or_else(|| "-".to_string(), |y| y.to_string());
        writeln!(
            out,
            "{:>3}  {}\t{:>12}\t{:.2}\t{:.2}\t{year}",
            i + 1,
            r.prefecture_name,
            r.value,
            r.latitude,
            r.longitude,
        )
        .unwrap();
    }
    out
}

/// Per-year frames, oldest first, each under a year header.
#[must_use]
pub fn frames(frames: &BTreeMap<i32, Vec<Record>>) -> String {
    let mut out = String::new();
    for (year, table) in frames {
        writeln!(out, "== {year} ==").unwrap();
        out.push_str(&records(table));
    }
    out
}

/// Summary block.
#[must_use]
pub fn summary(title: &str, summary: &TableSummary) -> String {
    let mut out = format!("{title}\n");
    writeln!(out, "  records: {}", summary.count).unwrap();
    writeln!(out, "  total:   {}", summary.total).unwrap();
    match summary.mean {
        Some(mean) => writeln!(out, "  mean:    {mean:.1}").unwrap(),
        None => out.push_str("  mean:    -\n"),
    }
    match &summary.max {
        Some(max) => writeln!(out, "  max:     {} ({})", max.prefecture_name, max.value).unwrap(),
        None => out.push_str("  max:     -\n"),
    }
    out
}

/// Reference table dump.
#[must_use]
pub fn prefectures(entries: &[Prefecture]) -> String {
    let mut out = String::new();
    for p in entries {
        writeln!(
            out,
            "{}  {}\t{:.2}\t{:.2}",
            p.area_code, p.name, p.latitude, p.longitude
        )
        .unwrap();
    }
    out
}

/// Synthetic rows, each prefixed so they cannot pass for real data.
#[must_use]
pub fn synthetic(rows: &[SyntheticRecord]) -> String {
    let mut out = String::new();
    for r in rows {
        writeln!(
            out,
            "[synthetic] {}  {}\t{:>8.1}\t{:+.2}",
            r.year, r.prefecture_name, r.population, r.change_rate
        )
        .unwrap();
    }
    out
}

/// Synthetic frames, oldest year first.
#[must_use]
pub fn synthetic_frames(frames: &BTreeMap<i32, Vec<SyntheticRecord>>) -> String {
    let mut out = String::new();
    for (year, rows) in frames {
        writeln!(out, "== {year} [synthetic] ==").unwrap();
        out.push_str(&synthetic(rows));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo(year: Option<i32>) -> Record {
        Record {
            prefecture_name: "東京都".to_string(),
            value: 12_345,
            latitude: 35.68,
            longitude: 139.76,
            year,
        }
    }

    fn synthetic_row(year: i32, change_rate: f64) -> SyntheticRecord {
        SyntheticRecord {
            year,
            prefecture_name: "東京".to_string(),
            population: 1000.0 + change_rate,
            change_rate,
            latitude: 35.68,
            longitude: 139.76,
        }
    }

    #[test]
    fn renders_records() {
        let out = records(&[tokyo(Some(2020)), tokyo(None)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1  東京都"));
        assert!(lines[0].contains("12345"));
        assert!(lines[0].ends_with("2020"));
        assert!(lines[1].ends_with('-'));
    }

    #[test]
    fn renders_frames_oldest_first() {
        let table = vec![tokyo(Some(2021)), tokyo(Some(2020)), tokyo(None)];
        let out = frames(&estat_map_analytics::by_year(&table));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "== 2020 ==");
        assert!(lines[1].ends_with("2020"));
        assert_eq!(lines[2], "== 2021 ==");
        assert!(lines[3].ends_with("2021"));
    }

    #[test]
    fn renders_empty_summary() {
        let out = summary(
            "empty",
            &TableSummary {
                count: 0,
                total: 0,
                mean: None,
                max: None,
            },
        );
        assert!(out.contains("records: 0"));
        assert!(out.contains("mean:    -"));
    }

    #[test]
    fn labels_synthetic_rows() {
        let out = synthetic(&[synthetic_row(2000, 0.5)]);
        assert!(out.starts_with("[synthetic] 2000  東京"));
        assert!(out.contains("+0.50"));
    }

    #[test]
    fn labels_synthetic_frames() {
        let rows = vec![synthetic_row(2001, 1.0), synthetic_row(2000, -1.0)];
        let out = synthetic_frames(&estat_map_synthetic::frames(&rows));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "== 2000 [synthetic] ==");
        assert!(lines[1].starts_with("[synthetic] 2000"));
        assert_eq!(lines[2], "== 2001 [synthetic] ==");
    }
}
