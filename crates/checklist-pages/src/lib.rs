//! Reader for paginated observation exports.
//!
//! Each export page is a JSON object whose `results` array holds
//! observations. Pages are decoded into [`checklist_core`] types and returned
//! in page order, ready for [`checklist_core::aggregate`].
//!
//! # Quick start
//!
//! ```no_run
//! use checklist_pages::load_dir;
//!
//! let pages = load_dir("exports/").unwrap();
//! println!("{} pages", pages.len());
//! ```

pub mod error;
mod order;

use std::path::{Path, PathBuf};

use checklist_core::observation::Page;
pub use error::{Error, Result};
pub use order::order_pages;

/// Decode one export page from `input`.
pub fn parse_page(input: &str) -> Result<Page> { Ok(serde_json::from_str(input)?) }

/// Read and decode one export page from disk.
pub fn read_page(path: &Path) -> Result<Page> {
  let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let page: Page = serde_json::from_str(&raw).map_err(|source| Error::Json {
    path: path.to_path_buf(),
    source,
  })?;
  tracing::debug!(
    path = %path.display(),
    page = ?page.page,
    observations = page.results.len(),
    "read export page"
  );
  Ok(page)
}

/// List the `*.json` files directly inside `dir`, in page order.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
  let io_err = |source: std::io::Error| Error::Io {
    path: dir.to_path_buf(),
    source,
  };

  let mut paths = Vec::new();
  for entry in std::fs::read_dir(dir).map_err(io_err)? {
    let path = entry.map_err(io_err)?.path();
    let is_json = path
      .extension()
      .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json && path.is_file() {
      paths.push(path);
    }
  }
  Ok(order_pages(paths))
}

/// Read every export page in `dir`, in page order.
///
/// A directory without any page is an error: an empty checklist from a
/// mistyped path would look like a valid result.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Page>> {
  let dir = dir.as_ref();
  let paths = discover(dir)?;
  if paths.is_empty() {
    return Err(Error::NoPages(dir.to_path_buf()));
  }
  paths.iter().map(|path| read_page(path)).collect()
}

#[cfg(test)]
mod tests {
  use checklist_core::taxon::{Rank, TaxonId};

  use super::*;

  const PAGE: &str = r#"{
    "total_results": 1,
    "page": 3,
    "per_page": 200,
    "results": [
      {
        "id": 123456,
        "observed_on": "2021-08-14",
        "created_at": "2021-08-14T17:03:11-04:00",
        "user": { "id": 5, "login": "frank", "name": "Frank" },
        "identifications": [
          {
            "user": { "login": "alice", "id": 2 },
            "taxon": {
              "id": 48662,
              "name": "Danaus plexippus",
              "rank": "species",
              "ancestors": [
                { "id": 1, "name": "Animalia", "rank": "kingdom" },
                { "id": 47922, "name": "Danaus", "rank": "genus" }
              ]
            },
            "taxon_id": 48662,
            "current": true,
            "created_at": "2021-08-15T09:00:00+00:00",
            "taxon_change": null,
            "category": "improving"
          }
        ]
      }
    ]
  }"#;

  #[test]
  fn parses_export_page() {
    let page = parse_page(PAGE).unwrap();
    assert_eq!(page.page, Some(3));
    assert_eq!(page.results.len(), 1);

    let obs = &page.results[0];
    assert_eq!(obs.id.0, 123456);
    assert_eq!(obs.user.login, "frank");
    assert_eq!(obs.identifications.len(), 1);

    let ident = &obs.identifications[0];
    assert_eq!(ident.login(), "alice");
    assert_eq!(ident.taxon_id, TaxonId(48662));
    assert_eq!(ident.taxon.rank, Rank::Species);
    assert_eq!(ident.taxon.parent().unwrap().name, "Danaus");
    assert!(ident.taxon_change.is_none());
  }

  #[test]
  fn results_is_required() {
    assert!(matches!(parse_page(r#"{ "page": 1 }"#), Err(Error::Decode(_))));
  }

  #[test]
  fn missing_optional_fields_default() {
    let page = parse_page(
      r#"{ "results": [ {
        "id": 1,
        "created_at": "2020-01-01T00:00:00Z",
        "user": { "id": 1, "login": "x" }
      } ] }"#,
    )
    .unwrap();
    let obs = &page.results[0];
    assert!(obs.observed_on.is_none());
    assert!(obs.user.name.is_none());
    assert!(obs.identifications.is_empty());
  }

  #[test]
  fn read_page_reports_path() {
    let missing = Path::new("/nonexistent/checklist/page-1.json");
    match read_page(missing) {
      Err(Error::Io { path, .. }) => assert_eq!(path, missing),
      other => panic!("expected io error, got {other:?}"),
    }
  }
}
