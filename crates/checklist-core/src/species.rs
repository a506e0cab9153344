//! Per-species output records.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
  observation::{Identification, Observation, ObservationId, Observer},
  resolve::Resolution,
  taxonomy::TaxonomyProjection,
};

/// One confirmed observation of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRecord {
  pub observation_id:  ObservationId,
  pub observed_on:     Option<NaiveDate>,
  pub created_at:      DateTime<FixedOffset>,
  /// Original curator confirmation, corrected for later taxon changes.
  pub confirmed_at:    DateTime<FixedOffset>,
  /// `confirmed_at` as milliseconds since the Unix epoch.
  pub confirmed_at_ms: i64,
  pub curator:         String,
  pub observer:        Observer,
}

impl ObservationRecord {
  pub fn new(
    observation: &Observation,
    confirming: &Identification,
    resolution: &Resolution,
  ) -> Self {
    Self {
      observation_id:  observation.id,
      observed_on:     observation.observed_on,
      created_at:      observation.created_at,
      confirmed_at:    resolution.confirmed_at,
      confirmed_at_ms: resolution.confirmed_at.timestamp_millis(),
      curator:         confirming.login().to_string(),
      observer:        observation.user.clone(),
    }
  }
}

/// Everything gathered for one species-level taxon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesAggregate {
  pub name:         String,
  /// In the order observations were processed.
  pub observations: Vec<ObservationRecord>,
  /// Filled from the first observation that confirms this species.
  pub taxonomy:     Option<TaxonomyProjection>,
}

impl SpeciesAggregate {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name:         name.into(),
      observations: Vec::new(),
      taxonomy:     None,
    }
  }
}
