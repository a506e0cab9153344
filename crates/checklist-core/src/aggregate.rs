//! Folding observation pages into a species checklist and change ledger.

use std::{
  collections::{BTreeMap, HashSet},
  hash::Hash,
};

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  config::ChecklistConfig,
  ledger::{ChangeLedger, TaxonChangeEvent},
  observation::{Observation, Page},
  scan::scan,
  species::SpeciesAggregate,
  taxon::TaxonId,
};

// ─── Accumulator ─────────────────────────────────────────────────────────────

/// Mutable state for one run. Each run gets a fresh accumulator; nothing is
/// shared between runs.
#[derive(Debug, Default)]
pub struct Accumulator {
  pub(crate) species:    BTreeMap<TaxonId, SpeciesAggregate>,
  /// Superseded ids in the order they were reported, repeats included.
  pub(crate) deprecated: Vec<TaxonId>,
  pub(crate) events:     Vec<TaxonChangeEvent>,
}

impl Accumulator {
  pub fn new() -> Self { Self::default() }

  pub fn add_observation(
    &mut self,
    observation: &Observation,
    config: &ChecklistConfig,
  ) -> Result<()> {
    scan(observation, config, self)
  }

  pub fn add_page(&mut self, page: &Page, config: &ChecklistConfig) -> Result<()> {
    for observation in &page.results {
      self.add_observation(observation, config)?;
    }
    Ok(())
  }

  pub fn species(&self) -> &BTreeMap<TaxonId, SpeciesAggregate> { &self.species }

  pub fn events(&self) -> &[TaxonChangeEvent] { &self.events }

  pub(crate) fn drop_if_empty(&mut self, id: TaxonId) {
    if self
      .species
      .get(&id)
      .is_some_and(|species| species.observations.is_empty())
    {
      self.species.remove(&id);
    }
  }

  /// Remove every superseded taxon and build the change ledger.
  pub fn finish(self) -> Checklist {
    let Self {
      mut species,
      deprecated,
      events,
    } = self;

    let superseded = unique_in_order(deprecated);
    let mut removed = 0;
    for id in &superseded {
      if species.remove(id).is_some() {
        removed += 1;
      }
    }
    tracing::debug!(
      superseded = superseded.len(),
      removed,
      "dropped superseded taxa from checklist"
    );

    Checklist {
      species,
      changes: ChangeLedger::from_events(&events),
      superseded,
    }
  }
}

// ─── Checklist ───────────────────────────────────────────────────────────────

/// The finished species list and its change ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
  pub species:    BTreeMap<TaxonId, SpeciesAggregate>,
  pub changes:    ChangeLedger,
  /// Taxon ids removed because a later taxon change retired them, first
  /// reported first.
  pub superseded: Vec<TaxonId>,
}

/// Headline counts for a [`Checklist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
  pub species:      usize,
  pub observations: usize,
  pub superseded:   usize,
  pub changes:      usize,
}

impl Checklist {
  pub fn summary(&self) -> Summary {
    Summary {
      species:      self.species.len(),
      observations: self.species.values().map(|s| s.observations.len()).sum(),
      superseded:   self.superseded.len(),
      changes:      self.changes.len(),
    }
  }

  /// Species sorted by display name, ties broken by id.
  pub fn species_by_name(&self) -> Vec<(TaxonId, &SpeciesAggregate)> {
    let mut sorted: Vec<_> = self.species.iter().map(|(id, s)| (*id, s)).collect();
    sorted.sort_by(|(a_id, a), (b_id, b)| a.name.cmp(&b.name).then(a_id.cmp(b_id)));
    sorted
  }
}

// ─── Entry points ────────────────────────────────────────────────────────────

/// Process `pages` in order and return the finished checklist.
///
/// Fails on the first unrecognised taxon change; no partial checklist is
/// produced.
pub fn aggregate<'a, I>(pages: I, config: &ChecklistConfig) -> Result<Checklist>
where
  I: IntoIterator<Item = &'a Page>,
{
  let mut acc = Accumulator::new();
  for page in pages {
    acc.add_page(page, config)?;
  }
  Ok(acc.finish())
}

/// Drop repeated items, keeping the first occurrence of each.
pub fn unique_in_order<T, I>(items: I) -> Vec<T>
where
  T: Eq + Hash + Clone,
  I: IntoIterator<Item = T>,
{
  let mut seen = HashSet::new();
  items
    .into_iter()
    .filter(|item| seen.insert(item.clone()))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unique_keeps_first_seen_order() {
    let ids = vec![TaxonId(3), TaxonId(1), TaxonId(3), TaxonId(2), TaxonId(1)];
    assert_eq!(unique_in_order(ids), vec![TaxonId(3), TaxonId(1), TaxonId(2)]);
  }

  #[test]
  fn unique_of_empty_is_empty() {
    assert!(unique_in_order(Vec::<TaxonId>::new()).is_empty());
  }

  #[test]
  fn drop_if_empty_only_removes_empty_entries() {
    let mut acc = Accumulator::new();
    acc.species.insert(TaxonId(1), SpeciesAggregate::new("Empty"));
    acc.drop_if_empty(TaxonId(1));
    acc.drop_if_empty(TaxonId(2));
    assert!(acc.species.is_empty());
  }

  #[test]
  fn species_by_name_sorts_alphabetically() {
    let mut checklist = Checklist::default();
    checklist.species.insert(TaxonId(1), SpeciesAggregate::new("Zus"));
    checklist.species.insert(TaxonId(2), SpeciesAggregate::new("Aus"));
    checklist.species.insert(TaxonId(3), SpeciesAggregate::new("Mus"));

    let names: Vec<_> = checklist
      .species_by_name()
      .into_iter()
      .map(|(id, s)| (id.0, s.name.as_str()))
      .collect();
    assert_eq!(names, vec![(2, "Aus"), (3, "Mus"), (1, "Zus")]);
  }
}
