//! Parsing of RIR extended delegation files.
//!
//! - [`date`] - `YYYYMMDD` date tokens
//! - [`record`] - version, summary and detail lines
//! - [`source`] - one registry file at a time

mod date;
mod record;
mod source;

pub use date::parse_date;
pub use record::{parse_record, parse_version_record};
pub use source::{ingest, process, SourceStats};
