//! Japanese prefecture reference data.
//!
//! Provides the 47 prefectures keyed by their five-digit e-Stat area code
//! (`"01000"` for Hokkaido through `"47000"` for Okinawa), with display
//! names and the coordinates of each prefectural capital.

use crate::Prefecture;

/// Area code used by the statistics API for the nationwide aggregate.
///
/// Never resolves to a prefecture.
pub const NATIONWIDE_AREA_CODE: &str = "00000";

/// Number of prefectures in Japan.
pub const PREFECTURE_COUNT: usize = 47;

const fn pref(
    area_code: &'static str,
    name: &'static str,
    short_name: &'static str,
    latitude: f64,
    longitude: f64,
) -> Prefecture {
    Prefecture {
        area_code,
        name,
        short_name,
        latitude,
        longitude,
    }
}

/// All 47 prefectures in area code order.
pub static PREFECTURES: [Prefecture; PREFECTURE_COUNT] = [
    pref("01000", "北海道", "北海道", 43.06, 141.35),
    pref("02000", "青森県", "青森", 40.82, 140.74),
    pref("03000", "岩手県", "岩手", 39.70, 141.15),
    pref("04000", "宮城県", "宮城", 38.27, 140.87),
    pref("05000", "秋田県", "秋田", 39.72, 140.10),
    pref("06000", "山形県", "山形", 38.24, 140.36),
    pref("07000", "福島県", "福島", 37.75, 140.47),
    pref("08000", "茨城県", "茨城", 36.34, 140.45),
    pref("09000", "栃木県", "栃木", 36.57, 139.88),
    pref("10000", "群馬県", "群馬", 36.39, 139.06),
    pref("11000", "埼玉県", "埼玉", 35.86, 139.65),
    pref("12000", "千葉県", "千葉", 35.61, 140.12),
    pref("13000", "東京都", "東京", 35.68, 139.76),
    pref("14000", "神奈川県", "神奈川", 35.45, 139.64),
    pref("15000", "新潟県", "新潟", 37.90, 139.02),
    pref("16000", "富山県", "富山", 36.70, 137.21),
    pref("17000", "石川県", "石川", 36.59, 136.63),
    pref("18000", "福井県", "福井", 36.07, 136.22),
    pref("19000", "山梨県", "山梨", 35.66, 138.57),
    pref("20000", "長野県", "長野", 36.65, 138.18),
    pref("21000", "岐阜県", "岐阜", 35.39, 136.72),
    pref("22000", "静岡県", "静岡", 34.98, 138.38),
    pref("23000", "愛知県", "愛知", 35.18, 136.91),
    pref("24000", "三重県", "三重", 34.73, 136.51),
    pref("25000", "滋賀県", "滋賀", 35.00, 135.87),
    pref("26000", "京都府", "京都", 35.02, 135.76),
    pref("27000", "大阪府", "大阪", 34.69, 135.52),
    pref("28000", "兵庫県", "兵庫", 34.69, 135.18),
    pref("29000", "奈良県", "奈良", 34.69, 135.83),
    pref("30000", "和歌山県", "和歌山", 34.23, 135.17),
    pref("31000", "鳥取県", "鳥取", 35.50, 134.24),
    pref("32000", "島根県", "島根", 35.47, 133.05),
    pref("33000", "岡山県", "岡山", 34.66, 133.93),
    pref("34000", "広島県", "広島", 34.40, 132.46),
    pref("35000", "山口県", "山口", 34.19, 131.47),
    pref("36000", "徳島県", "徳島", 34.07, 134.56),
    pref("37000", "香川県", "香川", 34.34, 134.04),
    pref("38000", "愛媛県", "愛媛", 33.84, 132.77),
    pref("39000", "高知県", "高知", 33.56, 133.53),
    pref("40000", "福岡県", "福岡", 33.61, 130.42),
    pref("41000", "佐賀県", "佐賀", 33.25, 130.30),
    pref("42000", "長崎県", "長崎", 32.74, 129.87),
    pref("43000", "熊本県", "熊本", 32.79, 130.74),
    pref("44000", "大分県", "大分", 33.24, 131.61),
    pref("45000", "宮崎県", "宮崎", 31.91, 131.42),
    pref("46000", "鹿児島県", "鹿児島", 31.56, 130.56),
    pref("47000", "沖縄県", "沖縄", 26.21, 127.68),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn prefecture_count() {
        assert_eq!(PREFECTURES.len(), 47);
    }

    #[test]
    fn area_codes_are_unique_and_ordered() {
        for (i, p) in PREFECTURES.iter().enumerate() {
            assert_eq!(p.area_code, format!("{:02}000", i + 1), "{}", p.name);
        }
        let codes: BTreeSet<&str> = PREFECTURES.iter().map(|p| p.area_code).collect();
        assert_eq!(codes.len(), PREFECTURE_COUNT);
    }

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<&str> = PREFECTURES.iter().map(|p| p.name).collect();
        let short: BTreeSet<&str> = PREFECTURES.iter().map(|p| p.short_name).collect();
        assert_eq!(names.len(), PREFECTURE_COUNT);
        assert_eq!(short.len(), PREFECTURE_COUNT);
    }

    #[test]
    fn coordinates_are_inside_japan() {
        for p in &PREFECTURES {
            assert!((24.0..46.0).contains(&p.latitude), "{}", p.name);
            assert!((122.0..146.0).contains(&p.longitude), "{}", p.name);
        }
    }
}
