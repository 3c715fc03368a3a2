//! IPv4 range to CIDR decomposition.
//!
//! Registries describe IPv4 space as a start address plus an address count,
//! which need not be a power of two nor aligned. [`decompose`] re-expresses such
//! a range as the fewest CIDR blocks that cover it exactly.

use crate::models::{lo_mask, Ipv4, MAX_LENGTH};
use std::error::Error;
use std::net::Ipv4Addr;

/// Split `count` addresses starting at `start` into CIDR blocks.
///
/// Blocks are returned in ascending order, do not overlap, and their union is
/// exactly `[start, start + count - 1]`.
///
/// # Examples
/// ```
/// use rirstats_csv::processing::decompose;
/// use std::net::Ipv4Addr;
/// let blocks = decompose(Ipv4Addr::new(10, 0, 0, 0), 3).unwrap();
/// let blocks: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
/// assert_eq!(blocks, vec!["10.0.0.0/31", "10.0.0.2/32"]);
/// ```
pub fn decompose(start: Ipv4Addr, count: u64) -> Result<Vec<Ipv4>, Box<dyn Error>> {
    if count == 0 {
        return Err("Address count must be at least 1".into());
    }
    let mut next_ip = u32::from(start) as u64;
    let last_ip = next_ip + (count - 1);
    if last_ip > u32::MAX as u64 {
        return Err(format!("Range {start} + {count} extends past 255.255.255.255").into());
    }

    let mut blocks = Vec::new();
    while next_ip <= last_ip {
        let block = biggest_block(next_ip as u32, last_ip - next_ip + 1);
        blocks.push(block);
        next_ip += block.num_addresses();
    }
    Ok(blocks)
}

/// Largest block starting at `start_ip` that is aligned and holds at most
/// `remaining` addresses.
fn biggest_block(start_ip: u32, remaining: u64) -> Ipv4 {
    let addr = Ipv4Addr::from(start_ip);
    // floor(log2(remaining)) host bits fit in what is left of the range
    let fit_bits = (u64::BITS - 1 - remaining.leading_zeros()) as u8;
    let fit_mask = MAX_LENGTH.saturating_sub(fit_bits);
    Ipv4 {
        addr,
        mask: lo_mask(addr).max(fit_mask),
    }
}
