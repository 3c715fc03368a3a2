//! Typed records of the RIR extended delegation format.

use chrono::NaiveDate;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Header line of a delegation file. Only used to validate format compatibility.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionRecord {
    pub version: f64,
    pub registry: String,
    pub serial: u64,
    /// Number of detail records the registry declares for the file.
    pub records: u64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub utc_offset: i32,
}

/// Per-type aggregate count line. Consumed for diagnostics, never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    pub registry: String,
    pub kind: String,
    pub count: u64,
}

/// Fields shared by every address detail record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub registry: String,
    pub country: String,
    pub date: Option<NaiveDate>,
    pub status: String,
    pub opaque_id: Option<String>,
}

/// An IPv4 range: `count` addresses starting at `start`, not necessarily aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Record {
    pub start: Ipv4Addr,
    pub count: u64,
    pub registration: Registration,
}

/// An IPv6 range, already CIDR aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv6Record {
    pub start: Ipv6Addr,
    pub prefix_len: u8,
    pub registration: Registration,
}

/// Address detail record that survives parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRecord {
    Ipv4(Ipv4Record),
    Ipv6(Ipv6Record),
}

/// Any non-version line that the record parser keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Summary(SummaryRecord),
    Detail(DetailRecord),
}
