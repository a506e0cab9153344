//! Run configuration: who counts as a curator, and which ranks to surface.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Error, Result, taxon::Rank};

/// Ranks projected into each species' taxonomy when none are configured.
pub const DEFAULT_RANKS: [Rank; 6] = [
  Rank::Kingdom,
  Rank::Phylum,
  Rank::Class,
  Rank::Order,
  Rank::Family,
  Rank::Genus,
];

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistConfig {
  /// Logins whose identifications count as confirmation.
  pub curators: BTreeSet<String>,
  /// Ranks copied from a species' ancestry into its taxonomy projection.
  pub ranks:    BTreeSet<Rank>,
}

impl ChecklistConfig {
  /// Build a configuration from raw strings, as read from a config file,
  /// the environment, or the command line.
  ///
  /// Rank names are parsed strictly. At least one curator is required, since
  /// without one no observation can ever qualify.
  pub fn from_parts<C, R>(curators: C, ranks: R) -> Result<Self>
  where
    C: IntoIterator,
    C::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
  {
    let curators: BTreeSet<String> = curators
      .into_iter()
      .map(|c| c.as_ref().trim().to_string())
      .filter(|c| !c.is_empty())
      .collect();
    if curators.is_empty() {
      return Err(Error::NoCurators);
    }

    let mut parsed = BTreeSet::new();
    for rank in ranks {
      parsed.insert(rank.as_ref().parse::<Rank>()?);
    }
    if parsed.is_empty() {
      parsed.extend(DEFAULT_RANKS);
    }

    Ok(Self { curators, ranks: parsed })
  }

  pub fn is_curator(&self, login: &str) -> bool { self.curators.contains(login) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_curators_and_ranks() {
    let cfg =
      ChecklistConfig::from_parts(["alice", " bob ", ""], ["family", "Genus"]).unwrap();
    assert!(cfg.is_curator("alice"));
    assert!(cfg.is_curator("bob"));
    assert!(!cfg.is_curator(""));
    assert_eq!(cfg.ranks, BTreeSet::from([Rank::Family, Rank::Genus]));
  }

  #[test]
  fn empty_ranks_fall_back_to_defaults() {
    let cfg = ChecklistConfig::from_parts(["alice"], Vec::<String>::new()).unwrap();
    assert_eq!(cfg.ranks, BTreeSet::from(DEFAULT_RANKS));
  }

  #[test]
  fn no_curators_is_rejected() {
    let err = ChecklistConfig::from_parts(["  "], ["genus"]).unwrap_err();
    assert!(matches!(err, Error::NoCurators));
  }

  #[test]
  fn unknown_rank_is_rejected() {
    let err = ChecklistConfig::from_parts(["alice"], ["genus", "clade"]).unwrap_err();
    assert!(matches!(err, Error::UnknownRank(r) if r == "clade"));
  }
}
