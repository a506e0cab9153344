//! Error types for the page loader.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("reading {path}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("decoding page {path}: {source}")]
  Json {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("decoding page: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("no *.json export pages in {0}")]
  NoPages(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
