//! Error types for `checklist-core`.

use thiserror::Error;

use crate::observation::ObservationId;

#[derive(Debug, Error)]
pub enum Error {
  /// A taxon change whose type is outside `TaxonSwap`, `TaxonSplit` and
  /// `TaxonMerge`. Fatal: the aggregate cannot be trusted past this point.
  #[error(
    "observation {observation_id}: unrecognised taxon change type {kind:?} \
     (change {change_id})"
  )]
  UnknownChangeType {
    observation_id: ObservationId,
    change_id:      u64,
    kind:           String,
  },

  #[error("unknown taxonomic rank: {0:?}")]
  UnknownRank(String),

  #[error("no curator logins configured")]
  NoCurators,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
