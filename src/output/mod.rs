//! Output formatting for range data.
//!
//! - [`csv`] - CSV output with CIDR decomposition

mod csv;

pub use csv::{write_csv, CSV_HEADER};
