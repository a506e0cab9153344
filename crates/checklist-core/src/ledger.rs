//! Taxon-change events and the per-year ledger they are folded into.

use std::collections::{BTreeMap, btree_map::Entry};

use serde::{Deserialize, Serialize};

use crate::observation::ObservationId;

/// One step of a curator's reclassification history on an observation:
/// `prior_name` was later replaced by `new_name` through change `change_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonChangeEvent {
  pub observation_id: ObservationId,
  pub prior_name:     String,
  pub new_name:       String,
  /// Year of the later identification, i.e. when the change was applied.
  pub year:           i32,
  pub change_id:      u64,
}

/// What a prior species name became in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
  pub new_name:  String,
  pub change_id: u64,
}

/// Change events grouped by year, then by prior species name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeLedger(pub BTreeMap<i32, BTreeMap<String, LedgerEntry>>);

impl ChangeLedger {
  /// Fold events in order. For a repeated `(year, prior_name)` pair the
  /// first event is kept and later ones are ignored.
  pub fn from_events<'a, I>(events: I) -> Self
  where
    I: IntoIterator<Item = &'a TaxonChangeEvent>,
  {
    let mut ledger = Self::default();
    for event in events {
      ledger.record(event);
    }
    ledger
  }

  /// Returns `false` when an entry for the same year and prior name was
  /// already present.
  pub fn record(&mut self, event: &TaxonChangeEvent) -> bool {
    let by_name = self.0.entry(event.year).or_default();
    match by_name.entry(event.prior_name.clone()) {
      Entry::Vacant(slot) => {
        slot.insert(LedgerEntry {
          new_name:  event.new_name.clone(),
          change_id: event.change_id,
        });
        true
      }
      Entry::Occupied(existing) => {
        tracing::debug!(
          year = event.year,
          prior = %event.prior_name,
          kept = %existing.get().new_name,
          dropped = %event.new_name,
          "duplicate ledger entry ignored"
        );
        false
      }
    }
  }

  pub fn get(&self, year: i32, prior_name: &str) -> Option<&LedgerEntry> {
    self.0.get(&year).and_then(|by_name| by_name.get(prior_name))
  }

  /// Total number of entries across all years.
  pub fn len(&self) -> usize { self.0.values().map(BTreeMap::len).sum() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn event(year: i32, prior: &str, new: &str, change_id: u64) -> TaxonChangeEvent {
    TaxonChangeEvent {
      observation_id: ObservationId(1),
      prior_name: prior.into(),
      new_name: new.into(),
      year,
      change_id,
    }
  }

  #[test]
  fn groups_by_year_then_prior_name() {
    let events = vec![
      event(2020, "Aus bus", "Aus cus", 10),
      event(2021, "Aus bus", "Aus dus", 11),
      event(2020, "Eus fus", "Eus gus", 12),
    ];
    let ledger = ChangeLedger::from_events(&events);

    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.0.len(), 2);
    assert_eq!(ledger.get(2020, "Aus bus").unwrap().new_name, "Aus cus");
    assert_eq!(ledger.get(2021, "Aus bus").unwrap().change_id, 11);
    assert_eq!(ledger.get(2020, "Eus fus").unwrap().new_name, "Eus gus");
    assert!(ledger.get(2022, "Aus bus").is_none());
  }

  #[test]
  fn first_occurrence_wins() {
    let mut ledger = ChangeLedger::default();
    assert!(ledger.record(&event(2020, "Aus bus", "Aus cus", 10)));
    assert!(!ledger.record(&event(2020, "Aus bus", "Aus zus", 99)));

    let entry = ledger.get(2020, "Aus bus").unwrap();
    assert_eq!(entry.new_name, "Aus cus");
    assert_eq!(entry.change_id, 10);
    assert_eq!(ledger.len(), 1);
  }

  #[test]
  fn serialises_as_nested_maps() {
    let ledger = ChangeLedger::from_events(&[event(2019, "Aus bus", "Aus cus", 7)]);
    let json = serde_json::to_value(&ledger).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "2019": { "Aus bus": { "new_name": "Aus cus", "change_id": 7 } } })
    );
  }
}
