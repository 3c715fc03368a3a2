//! IPv4 CIDR block type and bit helpers.
//!
//! [`Ipv4`] is the output unit of the decomposer: a network address plus a
//! prefix length.

use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Smallest prefix length for which `ip` is a valid network address.
///
/// 0.0.0.0 is aligned to every block size and yields 0.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// IPv4 network address with prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Number of addresses covered by the block.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
