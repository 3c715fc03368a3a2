//! Aggregation of detail records from all registries.

use crate::models::{DetailRecord, Ipv4Record, Ipv6Record};
use itertools::{Either, Itertools};

/// Detail records from every source, partitioned by address family.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ranges {
    pub ipv4: Vec<Ipv4Record>,
    pub ipv6: Vec<Ipv6Record>,
}

impl Ranges {
    pub fn new() -> Ranges {
        Ranges::default()
    }

    /// Append one source's records, keeping input order within each family.
    pub fn extend(&mut self, records: Vec<DetailRecord>) {
        let (ipv4, ipv6): (Vec<_>, Vec<_>) =
            records.into_iter().partition_map(|record| match record {
                DetailRecord::Ipv4(r) => Either::Left(r),
                DetailRecord::Ipv6(r) => Either::Right(r),
            });
        self.ipv4.extend(ipv4);
        self.ipv6.extend(ipv6);
    }

    /// Stable sort of each family by numeric start address.
    pub fn sort(&mut self) {
        self.ipv4.sort_by_key(|r| r.start);
        self.ipv6.sort_by_key(|r| r.start);
    }
}
