//! Range processing.
//!
//! - [`ranges`] - aggregation of detail records across registries
//! - [`decompose`] - IPv4 range to CIDR block decomposition

mod decompose;
mod ranges;

// Re-export public functions
pub use decompose::decompose;
pub use ranges::Ranges;
