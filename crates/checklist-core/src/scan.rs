//! Per-observation scan for the confirming curator identification.

use crate::{
  Result,
  aggregate::Accumulator,
  config::ChecklistConfig,
  observation::{Identification, Observation},
  resolve::resolve,
  species::{ObservationRecord, SpeciesAggregate},
  taxon::{Rank, TaxonId},
  taxonomy::project,
};

/// The earliest identification that confirms an observation, with the
/// species it counts towards.
struct Qualifying<'a> {
  index:        usize,
  ident:        &'a Identification,
  species_id:   TaxonId,
  species_name: &'a str,
}

/// Fold one observation into `acc`.
///
/// Only the earliest current identification by a configured curator at
/// species or subspecies rank counts; subspecies are credited to their parent
/// species. Observations with no such identification contribute nothing.
pub fn scan(
  observation: &Observation,
  config: &ChecklistConfig,
  acc: &mut Accumulator,
) -> Result<()> {
  let Some(found) = qualifying(observation, config) else {
    tracing::trace!(observation = %observation.id, "no qualifying identification");
    return Ok(());
  };
  tracing::trace!(
    observation = %observation.id,
    species = %found.species_id,
    curator = found.ident.login(),
    index = found.index,
    "qualifying identification"
  );

  acc
    .species
    .entry(found.species_id)
    .or_insert_with(|| SpeciesAggregate::new(found.species_name));

  let resolution = match resolve(
    &observation.identifications,
    found.index,
    observation.id,
    &mut acc.events,
  ) {
    Ok(resolution) => resolution,
    Err(e) => {
      acc.drop_if_empty(found.species_id);
      return Err(e);
    }
  };
  acc.deprecated.extend(resolution.deprecated.iter().copied());

  if let Some(species) = acc.species.get_mut(&found.species_id) {
    species
      .observations
      .push(ObservationRecord::new(observation, found.ident, &resolution));
    if species.taxonomy.is_none() {
      species.taxonomy = Some(project(&found.ident.taxon.ancestors, &config.ranks));
    }
  }

  acc.drop_if_empty(found.species_id);
  Ok(())
}

fn qualifying<'a>(
  observation: &'a Observation,
  config: &ChecklistConfig,
) -> Option<Qualifying<'a>> {
  for (index, ident) in observation.identifications.iter().enumerate() {
    if !ident.current
      || !config.is_curator(ident.login())
      || !ident.taxon.rank.is_confirmable()
    {
      continue;
    }

    let (species_id, species_name) = if ident.taxon.rank == Rank::Subspecies {
      let Some(parent) = ident.taxon.parent() else {
        tracing::warn!(
          observation = %observation.id,
          taxon = %ident.taxon.id,
          "subspecies without ancestors; identification skipped"
        );
        continue;
      };
      (parent.id, parent.name.as_str())
    } else {
      (ident.taxon.id, ident.taxon.name.as_str())
    };

    return Some(Qualifying {
      index,
      ident,
      species_id,
      species_name,
    });
  }
  None
}
