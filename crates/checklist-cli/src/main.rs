//! `checklist` — build a species checklist from observation export pages.
//!
//! # Usage
//!
//! ```
//! checklist exports/ --curator alice --curator bob --output checklist.json
//! CHECKLIST_CURATORS=alice,bob checklist exports/ --pretty
//! checklist --config checklist.toml exports/
//! ```

mod report;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "checklist",
  version,
  about = "Build a species checklist and taxon-change ledger from observation exports"
)]
struct Args {
  /// Directory holding the export pages (`*.json`, numbered by page).
  #[arg(value_name = "DIR")]
  pages: PathBuf,

  /// Path to a TOML settings file (curators, ranks).
  #[arg(short, long, value_name = "FILE", default_value = "checklist.toml")]
  config: PathBuf,

  /// Curator login; repeat for several. Replaces the configured list.
  #[arg(long = "curator", value_name = "LOGIN")]
  curators: Vec<String>,

  /// Rank to include in each species' taxonomy; repeat for several.
  #[arg(long = "rank", value_name = "RANK")]
  ranks: Vec<String>,

  /// Write the checklist here instead of stdout.
  #[arg(short, long, value_name = "FILE")]
  output: Option<PathBuf>,

  /// Indent the JSON output.
  #[arg(long)]
  pretty: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so stdout carries only the checklist.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let config = Settings::load(&args.config)?
    .override_with(args.curators, args.ranks)
    .into_config()?;
  tracing::debug!(
    curators = config.curators.len(),
    ranks = ?config.ranks,
    "settings loaded"
  );

  let pages = checklist_pages::load_dir(&args.pages)
    .with_context(|| format!("loading export pages from {}", args.pages.display()))?;
  tracing::info!(pages = pages.len(), "export pages loaded");

  let checklist =
    checklist_core::aggregate(&pages, &config).context("building checklist")?;

  let summary = checklist.summary();
  tracing::info!(
    species = summary.species,
    observations = summary.observations,
    superseded = summary.superseded,
    changes = summary.changes,
    "checklist built"
  );

  report::write(&checklist, args.output.as_deref(), args.pretty)
}
