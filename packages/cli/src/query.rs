//! Shared filter/dataset arguments for the fetching subcommands.

use std::fmt::Display;
use std::str::FromStr;

use clap::Args;
use estat_map_stats::registry::{self, DEFAULT_DATASET_ID};
use estat_map_stats::{EstatClient, EstatConfig, FetchError};
use estat_map_stats_models::{
    CategoryFilter, EntryOrExit, Nationality, Sex, Table, YearFilter,
};

/// Which series to fetch and from which table.
#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    /// Arrivals or departures: `entry`/`exit` (or `001`/`002`)
    #[arg(long, default_value = "entry", value_parser = parse_code::<EntryOrExit>)]
    pub entry_or_exit: EntryOrExit,
    /// `total`, `male` or `female` (or `000`/`001`/`002`)
    #[arg(long, default_value = "total", value_parser = parse_code::<Sex>)]
    pub sex: Sex,
    /// `japanese` or `foreign` (or `001`/`002`)
    #[arg(long, default_value = "foreign", value_parser = parse_code::<Nationality>)]
    pub nationality: Nationality,
    /// Only keep observations from this year
    #[arg(long, conflicts_with = "all_years")]
    pub year: Option<i32>,
    /// Keep every year and attach it to each record
    #[arg(long)]
    pub all_years: bool,
    /// Dataset id from the embedded registry (see `datasets`)
    #[arg(long, default_value = DEFAULT_DATASET_ID)]
    pub dataset: String,
    /// Override the dataset's e-Stat `statsDataId`
    #[arg(long)]
    pub stats_data_id: Option<String>,
}

impl QueryArgs {
    /// The category filter selected by the flags.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        CategoryFilter::new(self.entry_or_exit, self.sex, self.nationality)
    }

    /// The year filter selected by the flags.
    #[must_use]
    pub const fn year_filter(&self) -> Option<YearFilter> {
        match (self.year, self.all_years) {
            (Some(year), _) => Some(YearFilter::Only(year)),
            (None, true) => Some(YearFilter::All),
            (None, false) => None,
        }
    }

    /// Resolves the dataset and reads credentials from the environment.
    ///
    /// `--stats-data-id` wins over `ESTAT_STATS_DATA_ID`, which wins over
    /// the dataset definition.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] for an unknown dataset or missing
    /// `ESTAT_APP_ID`.
    pub fn config(&self) -> Result<EstatConfig, FetchError> {
        let dataset = registry::dataset(&self.dataset)?;
        let mut config = EstatConfig::from_env(&dataset.stats_data_id)?;
        if let Some(id) = &self.stats_data_id {
            config.stats_data_id.clone_from(id);
        }
        Ok(config)
    }

    /// Fetches and normalizes the selected series.
    ///
    /// # Errors
    ///
    /// Any [`FetchError`] from configuration, transport, or validation.
    pub async fn run(&self) -> Result<Table, FetchError> {
        let client = EstatClient::new(self.config()?)?;
        client.fetch(&self.filter(), self.year_filter()).await
    }
}

fn parse_code<T>(s: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    T::from_str(s).map_err(|e| format!("{s:?}: {e}"))
}
