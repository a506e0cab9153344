//! Layered settings: config file, then `CHECKLIST_*` environment, then flags.

use std::path::Path;

use anyhow::{Context, Result};
use checklist_core::ChecklistConfig;
use serde::Deserialize;

/// Raw settings as read from the file and environment, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
  #[serde(default)]
  pub curators: Vec<String>,
  #[serde(default)]
  pub ranks:    Vec<String>,
}

impl Settings {
  /// Read `path` (optional) and the `CHECKLIST_` environment.
  ///
  /// `CHECKLIST_CURATORS` and `CHECKLIST_RANKS` are comma-separated lists.
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("CHECKLIST")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("curators")
          .with_list_parse_key("ranks"),
      )
      .build()
      .with_context(|| format!("reading settings from {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  /// Replace a list with command-line values when any were given.
  pub fn override_with(mut self, curators: Vec<String>, ranks: Vec<String>) -> Self {
    if !curators.is_empty() {
      self.curators = curators;
    }
    if !ranks.is_empty() {
      self.ranks = ranks;
    }
    self
  }

  pub fn into_config(self) -> Result<ChecklistConfig> {
    ChecklistConfig::from_parts(&self.curators, &self.ranks)
      .context("invalid checklist settings")
  }
}

#[cfg(test)]
mod tests {
  use checklist_core::taxon::Rank;

  use super::*;

  #[test]
  fn flags_replace_file_values() {
    let settings = Settings {
      curators: vec!["alice".into()],
      ranks:    vec!["genus".into()],
    }
    .override_with(vec!["bob".into(), "carol".into()], vec![]);

    assert_eq!(settings.curators, ["bob", "carol"]);
    assert_eq!(settings.ranks, ["genus"]);
  }

  #[test]
  fn into_config_validates() {
    let cfg = Settings {
      curators: vec!["alice".into()],
      ranks:    vec![],
    }
    .into_config()
    .unwrap();
    assert!(cfg.is_curator("alice"));
    assert!(cfg.ranks.contains(&Rank::Genus));

    assert!(Settings::default().into_config().is_err());
  }

  #[test]
  fn missing_file_is_not_an_error() {
    assert!(Settings::load(Path::new("/nonexistent/checklist/checklist.toml")).is_ok());
  }
}
