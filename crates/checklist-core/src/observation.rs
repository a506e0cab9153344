//! Observations and their identification histories.
//!
//! These types mirror one record of an export page. They are read-only input:
//! nothing in this crate mutates an observation after it has been decoded.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::taxon::{Taxon, TaxonChange, TaxonId};

/// Numeric identifier of an observation.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ObservationId(pub u64);

impl fmt::Display for ObservationId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

// ─── People ──────────────────────────────────────────────────────────────────

/// The person who made an observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observer {
  pub id:    u64,
  pub login: String,
  /// Display name; many accounts leave it blank.
  #[serde(default)]
  pub name:  Option<String>,
}

/// The author of an identification. Only the login matters here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
  pub login: String,
}

// ─── Identification ──────────────────────────────────────────────────────────

/// One user's taxon assertion on an observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identification {
  pub user:         Identifier,
  pub taxon:        Taxon,
  pub taxon_id:     TaxonId,
  /// `false` once the author has withdrawn or replaced this identification.
  pub current:      bool,
  pub created_at:   DateTime<FixedOffset>,
  /// Present when this identification was produced by a reclassification.
  #[serde(default)]
  pub taxon_change: Option<TaxonChange>,
}

impl Identification {
  pub fn login(&self) -> &str { &self.user.login }

  pub fn is_change(&self) -> bool { self.taxon_change.is_some() }
}

// ─── Observation ─────────────────────────────────────────────────────────────

/// A single field observation with its full identification history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
  pub id:              ObservationId,
  #[serde(default)]
  pub observed_on:     Option<NaiveDate>,
  pub created_at:      DateTime<FixedOffset>,
  pub user:            Observer,
  /// Oldest first. The export is assumed, not verified, to be chronological.
  #[serde(default)]
  pub identifications: Vec<Identification>,
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// One export file. Only `results` is required; the paging counters are kept
/// for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
  #[serde(default)]
  pub page:          Option<u32>,
  #[serde(default)]
  pub per_page:      Option<u32>,
  #[serde(default)]
  pub total_results: Option<u64>,
  pub results:       Vec<Observation>,
}
