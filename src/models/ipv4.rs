//! IPv4 address parsing, formatting and subnet arithmetic.
//!
//! Addresses are handled as `u32` with the most significant octet first. All
//! arithmetic is 32-bit; nothing is widened into another byte layout.

use super::prefix::PrefixLength;
use crate::error::ValidationError;

/// Split a `u32` address into its four octets, most significant first.
pub fn octets(addr: u32) -> [u8; 4] {
    [
        ((addr >> 24) & 0xFF) as u8,
        ((addr >> 16) & 0xFF) as u8,
        ((addr >> 8) & 0xFF) as u8,
        (addr & 0xFF) as u8,
    ]
}

/// Combine four octets into a `u32` address.
pub fn from_octets(b: [u8; 4]) -> u32 {
    (u32::from(b[0]) << 24) | (u32::from(b[1]) << 16) | (u32::from(b[2]) << 8) | u32::from(b[3])
}

/// Render an address as a dotted quad.
///
/// # Examples
/// ```
/// use subnet_calculator::models::format_addr;
/// assert_eq!(format_addr(0xC0A8010A), "192.168.1.10");
/// ```
pub fn format_addr(addr: u32) -> String {
    let [a, b, c, d] = octets(addr);
    format!("{a}.{b}.{c}.{d}")
}

/// Parse a dotted quad into a `u32` address.
///
/// Exactly four `.` separated segments, each made of decimal digits with a value
/// in 0-255. Leading zeros are accepted.
///
/// # Examples
/// ```
/// use subnet_calculator::models::parse_addr;
/// assert_eq!(parse_addr("10.0.0.5").unwrap(), 0x0A000005);
/// assert!(parse_addr("999.1.1.1").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<u32, ValidationError> {
    let text = text.trim();
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() != 4 {
        log::trace!("parse_addr({text}) got {} segments", segments.len());
        return Err(ValidationError::malformed_address(text));
    }

    let mut bytes = [0u8; 4];
    for (byte, segment) in bytes.iter_mut().zip(segments) {
        // u8::from_str also takes a leading '+', digits only here
        if segment.is_empty() || !segment.bytes().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::malformed_address(text));
        }
        *byte = segment
            .parse()
            .map_err(|_| ValidationError::malformed_address(text))?;
    }
    Ok(from_octets(bytes))
}

/// Mask with the top `prefix` bits set.
///
/// A shift by 32 is never performed: `/0` is answered directly.
///
/// # Examples
/// ```
/// use subnet_calculator::models::{compute_mask, PrefixLength};
/// assert_eq!(compute_mask(PrefixLength::new(24).unwrap()), 0xFFFFFF00);
/// assert_eq!(compute_mask(PrefixLength::new(0).unwrap()), 0);
/// ```
pub fn compute_mask(prefix: PrefixLength) -> u32 {
    match prefix.get() {
        0 => 0,
        _ => u32::MAX << prefix.host_bits(),
    }
}

pub fn compute_network(addr: u32, mask: u32) -> u32 {
    addr & mask
}

pub fn compute_broadcast(network: u32, mask: u32) -> u32 {
    network | !mask
}

/// `network + 1`. Wraps for `255.255.255.255/32`, which has no usable range anyway.
pub fn compute_first_usable(network: u32) -> u32 {
    network.wrapping_add(1)
}

/// `broadcast - 1`. Wraps for `0.0.0.0/32`.
pub fn compute_last_usable(broadcast: u32) -> u32 {
    broadcast.wrapping_sub(1)
}

/// Usable hosts, `2^(32 - prefix) - 2`, exact.
///
/// Not clamped: `/31` gives `0` and `/32` gives `-1`.
pub fn compute_total_hosts(prefix: PrefixLength) -> i64 {
    (1i64 << prefix.host_bits()) - 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(len: u8) -> PrefixLength {
        PrefixLength::new(len).unwrap()
    }

    #[test]
    fn test_compute_mask() {
        assert_eq!(compute_mask(prefix(0)), 0x00000000);
        assert_eq!(compute_mask(prefix(1)), 0x80000000);
        assert_eq!(compute_mask(prefix(8)), 0xFF000000);
        assert_eq!(compute_mask(prefix(16)), 0xFFFF0000);
        assert_eq!(compute_mask(prefix(24)), 0xFFFFFF00);
        assert_eq!(compute_mask(prefix(31)), 0xFFFFFFFE);
        assert_eq!(compute_mask(prefix(32)), 0xFFFFFFFF);
    }

    #[test]
    fn test_mask_leading_ones() {
        for len in 1..32u8 {
            let mask = compute_mask(prefix(len));
            assert_eq!(mask.leading_ones(), u32::from(len), "/{len}");
            assert_eq!(mask.trailing_zeros(), 32 - u32::from(len), "/{len}");
        }
    }

    #[test]
    fn test_compute_network_and_broadcast() {
        let addr = from_octets([192, 168, 1, 42]);
        let mask = compute_mask(prefix(24));
        let network = compute_network(addr, mask);
        assert_eq!(octets(network), [192, 168, 1, 0]);
        assert_eq!(octets(compute_broadcast(network, mask)), [192, 168, 1, 255]);

        let mask = compute_mask(prefix(16));
        let network = compute_network(addr, mask);
        assert_eq!(octets(network), [192, 168, 0, 0]);
        assert_eq!(octets(compute_broadcast(network, mask)), [192, 168, 255, 255]);

        let mask = compute_mask(prefix(32));
        let network = compute_network(addr, mask);
        assert_eq!(network, addr);
        assert_eq!(compute_broadcast(network, mask), addr);
    }

    #[test]
    fn test_usable_wraps_at_edges() {
        assert_eq!(compute_first_usable(u32::MAX), 0);
        assert_eq!(compute_last_usable(0), u32::MAX);
        assert_eq!(compute_first_usable(from_octets([10, 0, 0, 0])), 0x0A000001);
        assert_eq!(compute_last_usable(from_octets([10, 255, 255, 255])), 0x0AFFFFFE);
    }

    #[test]
    fn test_compute_total_hosts() {
        assert_eq!(compute_total_hosts(prefix(0)), 4294967294);
        assert_eq!(compute_total_hosts(prefix(8)), 16777214);
        assert_eq!(compute_total_hosts(prefix(16)), 65534);
        assert_eq!(compute_total_hosts(prefix(24)), 254);
        assert_eq!(compute_total_hosts(prefix(30)), 2);
        assert_eq!(compute_total_hosts(prefix(31)), 0);
        assert_eq!(compute_total_hosts(prefix(32)), -1);
    }

    #[test]
    fn test_parse_addr() {
        assert_eq!(parse_addr("192.168.1.10").unwrap(), 0xC0A8010A);
        assert_eq!(parse_addr("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_addr("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_addr(" 10.0.0.5\n").unwrap(), 0x0A000005);
        assert_eq!(parse_addr("010.000.000.005").unwrap(), 0x0A000005);
    }

    #[test]
    fn test_parse_addr_rejects() {
        for bad in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "999.1.1.1",
            "256.0.0.0",
            "1.2.3.-4",
            "1.2.3.+4",
            "1..3.4",
            "a.b.c.d",
            "1.2. 3.4",
            "1.2.3.99999999999999999999",
        ] {
            assert_eq!(
                parse_addr(bad).unwrap_err(),
                ValidationError::malformed_address(bad),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_format_addr() {
        assert_eq!(format_addr(0), "0.0.0.0");
        assert_eq!(format_addr(u32::MAX), "255.255.255.255");
        assert_eq!(format_addr(0xFFFFFF00), "255.255.255.0");
        assert_eq!(format_addr(0x0AFFFFFF), "10.255.255.255");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for text in ["192.168.1.0", "10.0.0.5", "172.16.254.1", "0.0.0.0", "255.255.255.255"] {
            assert_eq!(format_addr(parse_addr(text).unwrap()), text);
        }
        for addr in [0u32, 1, 0x7F000001, 0xC0A80101, 0xDEADBEEF, u32::MAX] {
            assert_eq!(parse_addr(&format_addr(addr)).unwrap(), addr);
        }
    }

    #[test]
    fn test_octets_match_std() {
        let addr = 0xC0A8010A;
        assert_eq!(octets(addr), std::net::Ipv4Addr::from(addr).octets());
        assert_eq!(from_octets([192, 168, 1, 10]), addr);
    }
}
