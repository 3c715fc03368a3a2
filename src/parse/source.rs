//! Per-registry ingestion: raw text to detail records.

use super::record::{parse_record, parse_version_record};
use crate::diagnostics::Diagnostics;
use crate::error::RirError;
use crate::models::{DetailRecord, Record, VersionRecord};

/// Counters gathered while processing one registry file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceStats {
    pub version: VersionRecord,
    pub summary: usize,
    /// Summary lines that could not be decoded.
    pub bad_summary: usize,
    pub ipv4: usize,
    pub ipv6: usize,
    /// Non-summary lines that produced no record (asn, unknown type, short).
    pub discarded: usize,
}

impl SourceStats {
    fn new(version: VersionRecord) -> Self {
        SourceStats {
            version,
            summary: 0,
            bad_summary: 0,
            ipv4: 0,
            ipv6: 0,
            discarded: 0,
        }
    }

    /// Detail lines seen, comparable with the count declared in the version record.
    pub fn detail_lines_seen(&self) -> usize {
        self.ipv4 + self.ipv6 + self.discarded
    }
}

/// Split raw registry text into record lines.
///
/// Lines are trimmed; blank lines and `#` comments are dropped. Order is kept.
pub fn ingest(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Parse ingested lines: the first is the version record, the rest are
/// summary or detail records.
///
/// Summary records are only counted. Detail records are returned in input order.
pub fn process(
    lines: &[String],
    diag: &dyn Diagnostics,
) -> Result<(Vec<DetailRecord>, SourceStats), RirError> {
    let (first, rest) = lines
        .split_first()
        .ok_or_else(|| RirError::version("", "no version record found"))?;
    let version = parse_version_record(first)?;
    let mut stats = SourceStats::new(version);
    let mut result = Vec::new();

    for line in rest {
        match parse_record(line, diag)? {
            Some(Record::Summary(_)) => stats.summary += 1,
            Some(Record::Detail(d)) => {
                match d {
                    DetailRecord::Ipv4(_) => stats.ipv4 += 1,
                    DetailRecord::Ipv6(_) => stats.ipv6 += 1,
                }
                result.push(d);
            }
            None if is_summary_line(line) => stats.bad_summary += 1,
            None => stats.discarded += 1,
        }
    }

    report_stats(&stats, diag);
    Ok((result, stats))
}

fn is_summary_line(line: &str) -> bool {
    line.split('|').nth(5) == Some("summary")
}

fn report_stats(stats: &SourceStats, diag: &dyn Diagnostics) {
    let v = &stats.version;
    diag.info(&format!(
        "registry={} version={} detail_expected={} detail_read={} summary_read={} bad_summary={} ipv4={} ipv6={} discarded={}",
        v.registry,
        v.version,
        v.records,
        stats.detail_lines_seen(),
        stats.summary,
        stats.bad_summary,
        stats.ipv4,
        stats.ipv6,
        stats.discarded,
    ));
    if stats.detail_lines_seen() as u64 != v.records {
        diag.info(&format!(
            "registry={} declared {} records but {} detail lines were read",
            v.registry,
            v.records,
            stats.detail_lines_seen()
        ));
    }
}
