#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the e-Stat prefecture map toolchain.
//!
//! Fetches a statistics table, filters it to one series, and prints the
//! map-ready records, a summary, or a ranking. Set `ESTAT_APP_ID` before
//! running any fetching subcommand; `RUST_LOG=debug` shows what the
//! normalizer dropped.

mod query;
mod render;

use clap::{Parser, Subcommand};
use estat_map_geography_models::ReferenceTable;
use estat_map_stats::registry;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::query::QueryArgs;

#[derive(Parser)]
#[command(name = "estat_map", about = "e-Stat prefecture statistics for maps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one series and print its records in payload order
    Fetch {
        #[command(flatten)]
        query: QueryArgs,
        /// Group records into per-year animation frames, oldest first
        #[arg(long, requires = "all_years")]
        frames: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Fetch one series and print count, total, mean and maximum
    Summary {
        #[command(flatten)]
        query: QueryArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Fetch one series and print the largest prefectures first
    Rank {
        #[command(flatten)]
        query: QueryArgs,
        /// Number of prefectures to show
        #[arg(long, default_value = "10")]
        top: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the prefecture reference table
    Prefectures {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the embedded dataset definitions
    Datasets,
    /// Print synthetic population trends (not real data)
    Synthetic {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Only print this year, largest change first
        #[arg(long, conflicts_with = "frames")]
        year: Option<i32>,
        /// Print every year as its own frame, oldest first
        #[arg(long)]
        frames: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            query,
            frames,
            json,
        } => {
            let table = fetch(&query).await?;
            if frames {
                let frames = estat_map_analytics::by_year(&table);
                if let Some((first, last)) = estat_map_analytics::year_range(&table) {
                    log::info!("{} frames from {first} to {last}", frames.len());
                }
                if json {
                    print_json(&frames)?;
                } else {
                    print!("{}", render::frames(&frames));
                }
            } else if json {
                print_json(&table)?;
            } else {
                print!("{}", render::records(&table));
            }
        }
        Commands::Summary { query, json } => {
            let table = fetch(&query).await?;
            let summary = estat_map_analytics::summarize(&table);
            if json {
                print_json(&summary)?;
            } else {
                print!("{}", render::summary(&query.filter().label(), &summary));
            }
        }
        Commands::Rank { query, top, json } => {
            let table = fetch(&query).await?;
            let ranked = estat_map_analytics::top(&table, top);
            if json {
                print_json(&ranked)?;
            } else {
                print!("{}", render::records(&ranked));
            }
        }
        Commands::Prefectures { json } => {
            let entries = ReferenceTable::default().all();
            if json {
                print_json(&entries)?;
            } else {
                print!("{}", render::prefectures(entries));
            }
        }
        Commands::Datasets => {
            for dataset in registry::all_datasets() {
                println!(
                    "{}  {}  {}",
                    dataset.id, dataset.stats_data_id, dataset.name
                );
            }
        }
        Commands::Synthetic {
            seed,
            year,
            frames,
            json,
        } => {
            let mut rows = match seed {
                Some(seed) => estat_map_synthetic::generate_default(&mut StdRng::seed_from_u64(seed)),
                None => estat_map_synthetic::generate_default(&mut rand::rng()),
            };
            if let Some(year) = year {
                rows = estat_map_synthetic::year_view(&rows, year);
            }
            log::warn!("Printing {} synthetic rows; these are not real statistics", rows.len());
            if frames {
                let frames = estat_map_synthetic::frames(&rows);
                if json {
                    print_json(&frames)?;
                } else {
                    print!("{}", render::synthetic_frames(&frames));
                }
            } else if json {
                print_json(&rows)?;
            } else {
                print!("{}", render::synthetic(&rows));
            }
        }
    }

    Ok(())
}

async fn fetch(query: &QueryArgs) -> Result<estat_map_stats::Table, Box<dyn std::error::Error>> {
    match query.run().await {
        Ok(table) => Ok(table),
        Err(e) => {
            log::error!(
                "Fetch failed: {e}. Run `estat_map synthetic` for offline sample data."
            );
            Err(e.into())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
