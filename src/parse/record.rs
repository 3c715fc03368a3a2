//! Line decoding for version, summary and detail records.
//!
//! Line shapes (pipe delimited):
//! - version: `version|registry|serial|records|startdate|enddate|UTCoffset`
//! - summary: `registry|*|type|*|count|summary`
//! - detail:  `registry|cc|type|start|value|date|status[|opaque-id]`
//!
//! A detail line that is long enough but fails to decode is fatal; a line that
//! is too short, or a summary line that fails to decode, is reported and skipped.

use super::date::parse_date;
use crate::diagnostics::Diagnostics;
use crate::error::{ParseWarning, RirError};
use crate::models::{
    DetailRecord, Ipv4Record, Ipv6Record, Record, Registration, SummaryRecord, VersionRecord,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

const FIELD_DELIMITER: char = '|';
const VERSION_FIELDS: usize = 7;
const MIN_RECORD_FIELDS: usize = 6;
const IPV6_MAX_PREFIX: u8 = 128;

/// Parse the version record and check that the format is 2.x.
pub fn parse_version_record(line: &str) -> Result<VersionRecord, RirError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != VERSION_FIELDS {
        return Err(RirError::version(line, format!("got {} fields", fields.len())));
    }

    let version: f64 = fields[0]
        .trim()
        .parse()
        .map_err(|_| RirError::version(line, format!("unparsable version '{}'", fields[0])))?;
    // 3.0 and later are assumed to change the field layout.
    if !(2.0..3.0).contains(&version) {
        return Err(RirError::version(line, format!("unsupported version {}", fields[0])));
    }

    Ok(VersionRecord {
        version,
        registry: fields[1].to_string(),
        serial: parse_field(fields[2], "serial").map_err(|e| RirError::version(line, e))?,
        records: parse_field(fields[3], "records").map_err(|e| RirError::version(line, e))?,
        start_date: parse_date(fields[4]),
        end_date: parse_date(fields[5]),
        utc_offset: parse_field(fields[6], "UTC offset").map_err(|e| RirError::version(line, e))?,
    })
}

/// Parse a summary or detail line.
///
/// Returns `Ok(None)` for lines that are skipped: too short, undecodable
/// summaries, `asn` records and unknown record types.
pub fn parse_record(line: &str, diag: &dyn Diagnostics) -> Result<Option<Record>, RirError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < MIN_RECORD_FIELDS {
        diag.warn(&ParseWarning::ShortLine {
            line: line.to_string(),
        });
        return Ok(None);
    }

    if fields[5] == "summary" {
        return Ok(parse_summary(line, &fields, diag).map(Record::Summary));
    }

    Ok(parse_detail(line, &fields, diag)?.map(Record::Detail))
}

fn parse_summary(line: &str, fields: &[&str], diag: &dyn Diagnostics) -> Option<SummaryRecord> {
    match parse_field::<u64>(fields[4], "count") {
        Ok(count) => Some(SummaryRecord {
            registry: fields[0].to_string(),
            kind: fields[2].to_string(),
            count,
        }),
        Err(reason) => {
            diag.warn(&ParseWarning::SummaryDecode {
                line: line.to_string(),
                reason,
            });
            None
        }
    }
}

fn parse_detail(
    line: &str,
    fields: &[&str],
    diag: &dyn Diagnostics,
) -> Result<Option<DetailRecord>, RirError> {
    let kind = fields[2];
    let status = fields
        .get(6)
        .ok_or_else(|| RirError::detail(line, "missing status field"))?;
    let registration = Registration {
        registry: fields[0].to_string(),
        country: fields[1].to_string(),
        date: parse_date(fields[5]),
        status: status.to_string(),
        opaque_id: fields
            .get(7)
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string()),
    };

    match kind {
        "ipv4" => {
            let start: Ipv4Addr = parse_field(fields[3], "IPv4 address")
                .map_err(|e| RirError::detail(line, e))?;
            let count: u64 =
                parse_field(fields[4], "address count").map_err(|e| RirError::detail(line, e))?;
            if count == 0 {
                return Err(RirError::detail(line, "address count is zero"));
            }
            if u32::from(start) as u64 + (count - 1) > u32::MAX as u64 {
                return Err(RirError::detail(
                    line,
                    "address range extends past 255.255.255.255",
                ));
            }
            Ok(Some(DetailRecord::Ipv4(Ipv4Record {
                start,
                count,
                registration,
            })))
        }
        "ipv6" => {
            let start: Ipv6Addr = parse_field(fields[3], "IPv6 address")
                .map_err(|e| RirError::detail(line, e))?;
            let prefix_len: u8 =
                parse_field(fields[4], "prefix length").map_err(|e| RirError::detail(line, e))?;
            if prefix_len > IPV6_MAX_PREFIX {
                return Err(RirError::detail(
                    line,
                    format!("prefix length {prefix_len} is longer than {IPV6_MAX_PREFIX}"),
                ));
            }
            Ok(Some(DetailRecord::Ipv6(Ipv6Record {
                start,
                prefix_len,
                registration,
            })))
        }
        "asn" => {
            // Decoded so that a broken asn line is still fatal, then dropped.
            parse_field::<u32>(fields[3], "AS number").map_err(|e| RirError::detail(line, e))?;
            parse_field::<u64>(fields[4], "AS count").map_err(|e| RirError::detail(line, e))?;
            Ok(None)
        }
        other => {
            diag.warn(&ParseWarning::UnsupportedType {
                line: line.to_string(),
                kind: other.to_string(),
            });
            Ok(None)
        }
    }
}

fn parse_field<T: FromStr>(value: &str, name: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid {name} '{value}'"))
}
