//! Taxon-change resolution.
//!
//! When a curator's confirming identification was produced by a taxon change,
//! the date it carries is the date of the reclassification, not of the
//! curator's review. Walking the curator's earlier identifications on the same
//! observation recovers the original confirmation and every taxon id the
//! change chain has since retired.

use chrono::{DateTime, Datelike, FixedOffset};

use crate::{
  Error, Result,
  ledger::TaxonChangeEvent,
  observation::{Identification, ObservationId},
  taxon::{TaxonChange, TaxonChangeKind, TaxonId},
};

/// Outcome of resolving one qualifying identification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
  /// Taxon ids superseded along the chain, newest first. Never includes the
  /// qualifying identification's own taxon.
  pub deprecated:     Vec<TaxonId>,
  /// When the curator originally confirmed the observation.
  pub confirmed_at:   DateTime<FixedOffset>,
  /// `false` when the walk reached the curator's oldest identification
  /// without finding one that was not itself a change; `confirmed_at` is
  /// then that oldest identification's date.
  pub original_found: bool,
}

impl Resolution {
  fn unchanged(confirmed_at: DateTime<FixedOffset>) -> Self {
    Self {
      deprecated: Vec::new(),
      confirmed_at,
      original_found: true,
    }
  }
}

/// A curator identification visited by the backward walk.
#[derive(Debug, Clone, Copy)]
struct ChainLink {
  taxon_id:   TaxonId,
  created_at: DateTime<FixedOffset>,
  is_change:  bool,
}

impl ChainLink {
  fn of(ident: &Identification) -> Self {
    Self {
      taxon_id:   ident.taxon_id,
      created_at: ident.created_at,
      is_change:  ident.is_change(),
    }
  }
}

/// Resolve the identification at `curator_index`.
///
/// Every earlier identification by the same author produces one
/// [`TaxonChangeEvent`] in `events`, relative to the most recent change seen
/// so far on the walk.
///
/// # Errors
///
/// [`Error::UnknownChangeType`] if the qualifying identification's change is
/// not a swap, split or merge.
///
/// # Panics
///
/// If `curator_index` is out of bounds.
pub fn resolve(
  identifications: &[Identification],
  curator_index: usize,
  observation_id: ObservationId,
  events: &mut Vec<TaxonChangeEvent>,
) -> Result<Resolution> {
  let start = &identifications[curator_index];
  let Some(change) = &start.taxon_change else {
    return Ok(Resolution::unchanged(start.created_at));
  };
  let kind = TaxonChangeKind::from_tag(&change.kind).ok_or_else(|| {
    Error::UnknownChangeType {
      observation_id,
      change_id: change.id,
      kind: change.kind.clone(),
    }
  })?;

  let curator = start.login();
  let mut latest: (&Identification, &TaxonChange) = (start, change);
  let mut chain = vec![ChainLink::of(start)];

  for ident in identifications[..curator_index]
    .iter()
    .rev()
    .filter(|ident| ident.login() == curator)
  {
    let (later, later_change) = latest;
    events.push(TaxonChangeEvent {
      observation_id,
      prior_name: ident.taxon.name.clone(),
      new_name: later.taxon.name.clone(),
      year: later.created_at.year(),
      change_id: later_change.id,
    });
    // An identification without a change leaves a gap; keep attributing
    // to the last change seen.
    if let Some(earlier_change) = &ident.taxon_change {
      latest = (ident, earlier_change);
    }
    chain.push(ChainLink::of(ident));
  }

  let resolution = settle(&chain);
  if resolution.original_found {
    tracing::debug!(
      observation = %observation_id,
      curator,
      change = kind.tag(),
      links = chain.len(),
      deprecated = resolution.deprecated.len(),
      "resolved taxon change chain"
    );
  } else {
    tracing::warn!(
      observation = %observation_id,
      curator,
      change = kind.tag(),
      fallback = %resolution.confirmed_at,
      "no original confirmation before change chain; using earliest curator identification"
    );
  }
  Ok(resolution)
}

/// Scan the chain newest to oldest. Each link after the first retires its
/// taxon id; the first link that is not itself a change is the original
/// confirmation.
fn settle(chain: &[ChainLink]) -> Resolution {
  let mut deprecated = Vec::new();
  for (i, link) in chain.iter().enumerate() {
    if i > 0 {
      deprecated.push(link.taxon_id);
    }
    if !link.is_change {
      return Resolution {
        deprecated,
        confirmed_at: link.created_at,
        original_found: true,
      };
    }
  }

  // Chain is never empty: it starts with the qualifying identification.
  let earliest = chain[chain.len() - 1].created_at;
  Resolution {
    deprecated,
    confirmed_at: earliest,
    original_found: false,
  }
}
