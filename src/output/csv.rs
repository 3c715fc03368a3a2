//! CSV output of aggregated ranges.

use crate::diagnostics::Diagnostics;
use crate::error::RirError;
use crate::models::{Ipv4Record, Ipv6Record, Registration};
use crate::processing::{decompose, Ranges};
use std::io::Write;

/// Header row of the CSV output.
pub const CSV_HEADER: &str = "type,subnet,registry,country,date,status,reg_id";

/// Write all ranges as CSV: IPv4 rows first, then IPv6, each sorted by start
/// address. Every IPv4 range becomes one row per CIDR block.
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(
    mut ranges: Ranges,
    out: &mut W,
    diag: &dyn Diagnostics,
) -> Result<usize, RirError> {
    diag.info("started CSV version of RIR stats");
    writeln!(out, "{CSV_HEADER}")?;

    ranges.sort();
    let mut output_count = 0;
    for r in &ranges.ipv4 {
        output_count += write_ipv4_rows(r, out)?;
    }
    for r in &ranges.ipv6 {
        write_ipv6_row(r, out)?;
        output_count += 1;
    }
    out.flush()?;

    diag.info(&format!(
        "completed CSV version of RIR stats; wrote {output_count} records"
    ));
    Ok(output_count)
}

fn write_ipv4_rows<W: Write>(r: &Ipv4Record, out: &mut W) -> Result<usize, RirError> {
    // a v4 range can be unaligned, so it may need several CIDR blocks
    let blocks = decompose(r.start, r.count).map_err(|e| {
        RirError::detail(&format!("{}|{}", r.start, r.count), e.to_string())
    })?;
    for block in &blocks {
        write_row(out, "ipv4", &block.to_string(), &r.registration)?;
    }
    Ok(blocks.len())
}

fn write_ipv6_row<W: Write>(r: &Ipv6Record, out: &mut W) -> Result<(), RirError> {
    let subnet = format!("{}/{}", r.start, r.prefix_len);
    write_row(out, "ipv6", &subnet, &r.registration)
}

fn write_row<W: Write>(
    out: &mut W,
    kind: &str,
    subnet: &str,
    reg: &Registration,
) -> Result<(), RirError> {
    writeln!(
        out,
        "{kind},{subnet},{registry},{country},{date},{status},{reg_id}",
        registry = escape_csv_field(&reg.registry),
        country = escape_csv_field(&reg.country),
        date = reg.date.map(|d| d.to_string()).unwrap_or_default(),
        status = escape_csv_field(&reg.status),
        reg_id = escape_csv_field(reg.opaque_id.as_deref().unwrap_or("")),
    )?;
    Ok(())
}

fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // Enclose in double quotes and double any embedded quotes.
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}
