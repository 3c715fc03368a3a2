//! Normalize RIR extended delegation statistics into a CIDR CSV.
//!
//! The run fetches each registry file in turn, parses it, merges the IPv4 and
//! IPv6 detail records, then writes them sorted with IPv4 ranges split into
//! CIDR blocks.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod output;
pub mod parse;
pub mod processing;

use diagnostics::Diagnostics;
use error::RirError;
use fetch::Fetcher;
use processing::Ranges;
use std::io::Write;

/// Fetch and parse every source, strictly one after another.
pub async fn collect_ranges<F: Fetcher>(
    fetcher: &F,
    sources: &[String],
    diag: &dyn Diagnostics,
) -> Result<Ranges, RirError> {
    let mut ranges = Ranges::new();
    for url in sources {
        diag.info(&format!("starting download of RIR stats from {url}"));
        let raw = fetcher.fetch(url).await?;
        let lines = parse::ingest(&raw);
        drop(raw);
        diag.info(&format!(
            "completed download of RIR stats; got {} records",
            lines.len()
        ));

        let (records, _stats) = parse::process(&lines, diag)?;
        ranges.extend(records);
    }
    diag.info(&format!(
        "collected {} ipv4 and {} ipv6 ranges from {} sources",
        ranges.ipv4.len(),
        ranges.ipv6.len(),
        sources.len()
    ));
    Ok(ranges)
}

/// Collect all sources and write the CSV to `out`. Returns the number of rows.
pub async fn run<F: Fetcher, W: Write>(
    fetcher: &F,
    sources: &[String],
    out: &mut W,
    diag: &dyn Diagnostics,
) -> Result<usize, RirError> {
    let ranges = collect_ranges(fetcher, sources, diag).await?;
    output::write_csv(ranges, out, diag)
}
