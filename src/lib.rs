//! This crate sorts a [CSV](https://www.rfc-editor.org/rfc/rfc4180) file in place by a numeric
//! identifier held in the first column of each row.
//!
//! Identifiers in real data files are rarely clean. A row keyed `ID-00042` sorts nowhere as text,
//! and a row keyed `unknown` does not sort at all. This crate repairs the first kind and demotes
//! the second: the first maximal run of decimal digits is extracted from each identifier and
//! becomes the row key, rows without any digits are moved below all valid rows in their original
//! order, and the header row always stays on top. Valid rows are ordered by the numeric value of
//! the extracted digits, with no upper bound on magnitude, so a key longer than any machine
//! integer still sorts correctly.
//!
//! The whole file is materialized in memory and rewritten atomically through a temporary file in
//! the destination directory, so a failed run never leaves a half-written mix of old and new
//! content behind.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use csv_id_sort::outcome::SortOutcome;
//! use csv_id_sort::sort::IdSort;
//!
//! fn sort_players(input: PathBuf) -> Result<(), anyhow::Error> {
//!     let id_sort = IdSort::new(input);
//!     match id_sort.run()? {
//!         SortOutcome::Rewritten { valid, invalid } => {
//!             println!("sorted {valid} rows, demoted {invalid}");
//!         }
//!         SortOutcome::NothingToWrite => {
//!             println!("empty source, nothing written");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub(crate) mod classifier;
pub(crate) mod identifier;
pub(crate) mod key;
pub(crate) mod loader;
pub(crate) mod writer;

pub mod dataset;
pub mod event;
pub mod outcome;
pub mod record;
pub mod sort;
