//! Core of the checklist builder.
//!
//! Turns paginated observation exports into a species checklist: for each
//! observation it finds the first curator confirmation at species level,
//! corrects its date for later taxon changes, and retires taxa those changes
//! superseded. Pure and synchronous; reading files and writing reports live in
//! the other crates.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod ledger;
pub mod observation;
pub mod resolve;
pub mod scan;
pub mod species;
pub mod taxon;
pub mod taxonomy;

pub use aggregate::{Accumulator, Checklist, Summary, aggregate, unique_in_order};
pub use config::ChecklistConfig;
pub use error::{Error, Result};
