//! Domain models for RIR delegation statistics.
//!
//! - [`Ipv4`] - IPv4 CIDR block, the unit of IPv4 output
//! - [`VersionRecord`], [`SummaryRecord`], [`DetailRecord`] - parsed file lines

mod ipv4;
mod record;

// Re-export public types
pub use ipv4::{lo_mask, Ipv4, MAX_LENGTH};
pub use record::{
    DetailRecord, Ipv4Record, Ipv6Record, Record, Registration, SummaryRecord, VersionRecord,
};
