//! # pricebook
//!
//! A viewer for the Michigan Liquor Control Commission price book.
//!
//! The price book is a fixed-width text file: one product per line, each
//! field at a fixed column range. This library parses those lines into
//! records, derives two price ratios per record, and renders the records
//! sorted by a chosen field.
//!
//! ## Overview
//!
//! - **Layout**: column ranges for every field of a line
//! - **Records**: raw field text plus price per mL and price per mL of alcohol
//! - **Sources**: the published URL, or a local copy of the file
//! - **Reports**: stable ascending sort, one tab-separated line per record
//!
//! ## Example
//!
//! ```
//! use pricebook::{Catalog, MalformedPolicy, SortField, render};
//!
//! let mut line = vec![b' '; 184];
//! line[5..14].copy_from_slice(b"KETEL ONE");
//! line[90..95].copy_from_slice(b"VODKA");
//! line[110..114].copy_from_slice(b"  80");
//! line[115..120].copy_from_slice(b"  750");
//! line[141..148].copy_from_slice(b"  10.00");
//! let lines = vec![String::from_utf8(line).unwrap()];
//!
//! let catalog = Catalog::from_lines(&lines, MalformedPolicy::Skip).unwrap();
//! let record = &catalog.records()[0];
//! assert_eq!(record.price_per_volume(), 0.013);
//! assert_eq!(record.price_per_ml_alcohol(), 0.033);
//!
//! let report = render(catalog.records(), SortField::Price);
//! assert!(report[0].contains("$10.00/btl"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod record;
pub mod report;
pub mod sort;
pub mod source;

pub use catalog::{Catalog, RunOutput, SkippedLine, load_catalog, run, run_with_source};
pub use config::{Config, MalformedPolicy};
pub use error::PricebookError;
pub use layout::{Field, LAYOUT, RECORD_WIDTH};
pub use record::{Record, round3};
pub use report::{render, render_text};
pub use sort::{SortField, sort_records, sorted};
pub use source::{
    DEFAULT_SOURCE_URL, FileSource, HttpSource, LineSource, fetch, source_for, split_lines,
};
