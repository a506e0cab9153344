//! Projection of an ancestor chain onto a set of ranks of interest.

use std::collections::{BTreeMap, BTreeSet};

use crate::taxon::{Rank, TaxonAncestor};

/// Rank → name for the ranks a reader cares about.
pub type TaxonomyProjection = BTreeMap<Rank, String>;

/// Record `rank → name` for every ancestor whose rank is wanted. A later
/// ancestor overwrites an earlier one at the same rank.
pub fn project(
  ancestors: &[TaxonAncestor],
  wanted: &BTreeSet<Rank>,
) -> TaxonomyProjection {
  let mut projection = TaxonomyProjection::new();
  for ancestor in ancestors {
    if wanted.contains(&ancestor.rank) {
      projection.insert(ancestor.rank, ancestor.name.clone());
    }
  }
  projection
}
