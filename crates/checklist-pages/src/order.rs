//! Page ordering by the number embedded in each file name.

use std::{
  cmp::Ordering,
  path::{Path, PathBuf},
};

/// Sort export files into page order.
///
/// The page number is the last run of ASCII digits in the file stem, so
/// `page-2.json` sorts before `page-10.json`. Files without a number follow
/// all numbered ones, by name.
pub fn order_pages(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
  paths.sort_by(|a, b| compare(a, b));
  paths
}

fn compare(a: &Path, b: &Path) -> Ordering {
  match (page_number(a), page_number(b)) {
    (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => a.cmp(b),
  }
}

fn page_number(path: &Path) -> Option<u64> {
  let stem = path.file_stem()?.to_str()?.as_bytes();
  let end = stem.iter().rposition(u8::is_ascii_digit)? + 1;
  // A non-digit byte ends any multi-byte character it belongs to, so the
  // digit run always starts on a character boundary.
  let start = stem[..end]
    .iter()
    .rposition(|b| !b.is_ascii_digit())
    .map_or(0, |i| i + 1);
  std::str::from_utf8(&stem[start..end]).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| PathBuf::from(format!("exports/{n}"))).collect()
  }

  fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
      .iter()
      .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
      .collect()
  }

  #[test]
  fn numeric_not_lexical() {
    let sorted = order_pages(paths(&["page-10.json", "page-2.json", "page-1.json"]));
    assert_eq!(names(&sorted), ["page-1.json", "page-2.json", "page-10.json"]);
  }

  #[test]
  fn last_digit_run_is_the_page() {
    let sorted = order_pages(paths(&["2023_obs_12.json", "2023_obs_3.json"]));
    assert_eq!(names(&sorted), ["2023_obs_3.json", "2023_obs_12.json"]);
  }

  #[test]
  fn unnumbered_files_go_last() {
    let sorted = order_pages(paths(&["extra.json", "page7.json", "another.json"]));
    assert_eq!(names(&sorted), ["page7.json", "another.json", "extra.json"]);
  }

  #[test]
  fn page_number_parsing() {
    assert_eq!(page_number(Path::new("observations-0042.json")), Some(42));
    assert_eq!(page_number(Path::new("12.json")), Some(12));
    assert_eq!(page_number(Path::new("none.json")), None);
  }

  #[test]
  fn non_ascii_before_number() {
    let sorted = order_pages(paths(&["pagé12.json", "pagé3.json", "ñ.json"]));
    assert_eq!(names(&sorted), ["pagé3.json", "pagé12.json", "ñ.json"]);
    assert_eq!(page_number(Path::new("pagé12.json")), Some(12));
    assert_eq!(page_number(Path::new("观察7.json")), Some(7));
  }
}
