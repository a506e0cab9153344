//! Taxa, ranks, and taxon-change records as they appear in the export.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Numeric identifier of a taxon.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaxonId(pub u64);

impl fmt::Display for TaxonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

// ─── Rank ────────────────────────────────────────────────────────────────────

/// Taxonomic rank, ordered from the root of the tree towards the leaves.
///
/// Rank strings the export uses but this enumeration does not know decode to
/// [`Rank::Other`]; such taxa never qualify and never appear in a taxonomy
/// projection.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
  Stateofmatter,
  Kingdom,
  Phylum,
  Subphylum,
  Superclass,
  Class,
  Subclass,
  Infraclass,
  Superorder,
  Order,
  Suborder,
  Infraorder,
  Parvorder,
  Zoosection,
  Zoosubsection,
  Superfamily,
  Epifamily,
  Family,
  Subfamily,
  Supertribe,
  Tribe,
  Subtribe,
  Genus,
  Genushybrid,
  Subgenus,
  Section,
  Subsection,
  Complex,
  Species,
  Hybrid,
  Subspecies,
  Variety,
  Form,
  Infrahybrid,
  #[serde(other)]
  Other,
}

impl Rank {
  /// Every named rank, root first. [`Rank::Other`] is not included.
  pub const ALL: [Rank; 34] = [
    Rank::Stateofmatter,
    Rank::Kingdom,
    Rank::Phylum,
    Rank::Subphylum,
    Rank::Superclass,
    Rank::Class,
    Rank::Subclass,
    Rank::Infraclass,
    Rank::Superorder,
    Rank::Order,
    Rank::Suborder,
    Rank::Infraorder,
    Rank::Parvorder,
    Rank::Zoosection,
    Rank::Zoosubsection,
    Rank::Superfamily,
    Rank::Epifamily,
    Rank::Family,
    Rank::Subfamily,
    Rank::Supertribe,
    Rank::Tribe,
    Rank::Subtribe,
    Rank::Genus,
    Rank::Genushybrid,
    Rank::Subgenus,
    Rank::Section,
    Rank::Subsection,
    Rank::Complex,
    Rank::Species,
    Rank::Hybrid,
    Rank::Subspecies,
    Rank::Variety,
    Rank::Form,
    Rank::Infrahybrid,
  ];

  /// The export's spelling of this rank.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Stateofmatter => "stateofmatter",
      Self::Kingdom => "kingdom",
      Self::Phylum => "phylum",
      Self::Subphylum => "subphylum",
      Self::Superclass => "superclass",
      Self::Class => "class",
      Self::Subclass => "subclass",
      Self::Infraclass => "infraclass",
      Self::Superorder => "superorder",
      Self::Order => "order",
      Self::Suborder => "suborder",
      Self::Infraorder => "infraorder",
      Self::Parvorder => "parvorder",
      Self::Zoosection => "zoosection",
      Self::Zoosubsection => "zoosubsection",
      Self::Superfamily => "superfamily",
      Self::Epifamily => "epifamily",
      Self::Family => "family",
      Self::Subfamily => "subfamily",
      Self::Supertribe => "supertribe",
      Self::Tribe => "tribe",
      Self::Subtribe => "subtribe",
      Self::Genus => "genus",
      Self::Genushybrid => "genushybrid",
      Self::Subgenus => "subgenus",
      Self::Section => "section",
      Self::Subsection => "subsection",
      Self::Complex => "complex",
      Self::Species => "species",
      Self::Hybrid => "hybrid",
      Self::Subspecies => "subspecies",
      Self::Variety => "variety",
      Self::Form => "form",
      Self::Infrahybrid => "infrahybrid",
      Self::Other => "other",
    }
  }

  /// Whether an identification at this rank can confirm an observation.
  pub fn is_confirmable(&self) -> bool {
    matches!(self, Self::Species | Self::Subspecies)
  }
}

impl fmt::Display for Rank {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Strict parse for configuration input: unknown names are an error rather
/// than [`Rank::Other`].
impl FromStr for Rank {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_ascii_lowercase();
    Self::ALL
      .into_iter()
      .find(|rank| rank.as_str() == wanted)
      .ok_or_else(|| Error::UnknownRank(s.to_string()))
  }
}

// ─── Taxon ───────────────────────────────────────────────────────────────────

/// One step of a taxon's ancestry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonAncestor {
  pub id:   TaxonId,
  pub name: String,
  pub rank: Rank,
}

/// A taxon as embedded in an identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxon {
  pub id:        TaxonId,
  pub name:      String,
  pub rank:      Rank,
  /// Root first; the last entry is the immediate parent.
  #[serde(default)]
  pub ancestors: Vec<TaxonAncestor>,
}

impl Taxon {
  pub fn parent(&self) -> Option<&TaxonAncestor> { self.ancestors.last() }
}

// ─── Taxon changes ───────────────────────────────────────────────────────────

/// Reference to the reclassification event that produced an identification.
///
/// `kind` is kept verbatim; it is only classified when a change chain is
/// resolved, so an unexpected tag surfaces as
/// [`Error::UnknownChangeType`] instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonChange {
  pub id:   u64,
  #[serde(rename = "type")]
  pub kind: String,
}

/// The closed set of reclassifications this tool knows how to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxonChangeKind {
  #[serde(rename = "TaxonSwap")]
  Swap,
  #[serde(rename = "TaxonSplit")]
  Split,
  #[serde(rename = "TaxonMerge")]
  Merge,
}

impl TaxonChangeKind {
  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag {
      "TaxonSwap" => Some(Self::Swap),
      "TaxonSplit" => Some(Self::Split),
      "TaxonMerge" => Some(Self::Merge),
      _ => None,
    }
  }

  pub fn tag(&self) -> &'static str {
    match self {
      Self::Swap => "TaxonSwap",
      Self::Split => "TaxonSplit",
      Self::Merge => "TaxonMerge",
    }
  }
}
