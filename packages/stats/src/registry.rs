//! Dataset registry: statistics tables known to the dashboards.
//!
//! Each `.toml` file in `packages/stats/datasets/` is baked into the binary
//! at compile time via [`include_str!`]. Adding a dataset means adding a
//! TOML file and listing it below.

use serde::Deserialize;

use crate::FetchError;

/// A statistics table definition loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetDefinition {
    /// Unique identifier (e.g. `"immigration_by_prefecture"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// e-Stat `statsDataId`.
    pub stats_data_id: String,
    /// Short description of what the table counts.
    #[serde(default)]
    pub description: String,
}

/// TOML configs embedded at compile time.
const DATASET_TOMLS: &[(&str, &str)] = &[
    (
        "immigration_by_prefecture",
        include_str!("../datasets/immigration_by_prefecture.toml"),
    ),
];

/// Dataset used when none is selected.
pub const DEFAULT_DATASET_ID: &str = "immigration_by_prefecture";

#[cfg(test)]
const EXPECTED_DATASET_COUNT: usize = 1;

/// Parses a single dataset definition.
///
/// # Errors
///
/// Returns [`FetchError::Config`] if the TOML is malformed.
pub fn parse_dataset_toml(toml_str: &str) -> Result<DatasetDefinition, FetchError> {
    toml::de::from_str(toml_str).map_err(|e| FetchError::Config {
        message: e.to_string(),
    })
}

/// Returns all embedded dataset definitions.
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_datasets() -> Vec<DatasetDefinition> {
    DATASET_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            parse_dataset_toml(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse dataset '{name}': {e}"))
        })
        .collect()
}

/// Looks up a dataset by id.
///
/// # Errors
///
/// Returns [`FetchError::Config`] if no dataset has that id.
pub fn dataset(id: &str) -> Result<DatasetDefinition, FetchError> {
    all_datasets()
        .into_iter()
        .find(|d| d.id == id)
        .ok_or_else(|| FetchError::Config {
            message: format!("Unknown dataset: {id}"),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn loads_all_datasets() {
        assert_eq!(all_datasets().len(), EXPECTED_DATASET_COUNT);
    }

    #[test]
    fn dataset_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for d in &all_datasets() {
            assert!(seen.insert(d.id.clone()), "Duplicate dataset ID: {}", d.id);
        }
    }

    #[test]
    fn toml_file_names_match_ids() {
        for ((name, _), d) in DATASET_TOMLS.iter().zip(all_datasets()) {
            assert_eq!(*name, d.id);
        }
    }

    #[test]
    fn all_datasets_have_required_fields() {
        for d in &all_datasets() {
            assert!(!d.name.is_empty(), "{}: empty name", d.id);
            assert_eq!(d.stats_data_id.len(), 10, "{}: bad statsDataId", d.id);
            assert!(d.stats_data_id.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn default_dataset_exists() {
        assert!(dataset(DEFAULT_DATASET_ID).is_ok());
        assert!(matches!(
            dataset("nope"),
            Err(FetchError::Config { .. })
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(parse_dataset_toml("id = ").is_err());
        assert!(parse_dataset_toml("id = \"x\"").is_err());
    }
}
