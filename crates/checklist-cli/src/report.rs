//! JSON output of a finished checklist.

use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::Path,
};

use anyhow::{Context, Result};
use checklist_core::Checklist;

/// Serialise `checklist` to `output`, or to stdout when `None`.
pub fn write(checklist: &Checklist, output: Option<&Path>, pretty: bool) -> Result<()> {
  match output {
    Some(path) => {
      let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
      write_to(BufWriter::new(file), checklist, pretty)
        .with_context(|| format!("writing {}", path.display()))
    }
    None => write_to(io::stdout().lock(), checklist, pretty).context("writing to stdout"),
  }
}

fn write_to<W: Write>(mut writer: W, checklist: &Checklist, pretty: bool) -> Result<()> {
  if pretty {
    serde_json::to_writer_pretty(&mut writer, checklist)?;
  } else {
    serde_json::to_writer(&mut writer, checklist)?;
  }
  writeln!(writer)?;
  writer.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use checklist_core::{species::SpeciesAggregate, taxon::TaxonId};

  use super::*;

  #[test]
  fn writes_species_changes_and_superseded() {
    let mut checklist = Checklist::default();
    checklist.species.insert(TaxonId(7), SpeciesAggregate::new("Aus bus"));
    checklist.superseded.push(TaxonId(3));

    let mut buf = Vec::new();
    write_to(&mut buf, &checklist, false).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["species"]["7"]["name"], "Aus bus");
    assert_eq!(value["superseded"], serde_json::json!([3]));
    assert_eq!(value["changes"], serde_json::json!({}));
    assert!(buf.ends_with(b"\n"));
  }
}
