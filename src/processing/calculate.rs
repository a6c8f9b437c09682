//! Calculation entry points.
//!
//! Validates the two input strings and derives the full [`SubnetReport`]. Nothing
//! is derived when validation fails.

use crate::error::ValidationError;
use crate::models::{parse_addr, Subnet, SubnetReport, SubnetRequest};

/// Validate `address_text` and `prefix_text` and derive the subnet report.
///
/// # Examples
/// ```
/// use subnet_calculator::processing::calculate;
/// let report = calculate("192.168.1.10", "24").unwrap();
/// assert_eq!(report.broadcast, "192.168.1.255");
/// assert_eq!(report.total_hosts, 254);
/// ```
pub fn calculate(address_text: &str, prefix_text: &str) -> Result<SubnetReport, ValidationError> {
    log::debug!("calculate(address={address_text:?}, prefix={prefix_text:?})");

    let request = SubnetRequest::parse(address_text, prefix_text).map_err(|e| {
        log::debug!("rejected: {e}");
        e
    })?;
    let subnet = Subnet::derive(&request);
    log::trace!("derived {subnet:?}");

    let report = SubnetReport::from(&subnet);
    log::debug!("{request} -> {subnet}, {} hosts", report.total_hosts);
    Ok(report)
}

/// Same as [`calculate`] for `a.b.c.d/p` notation.
///
/// The address is checked first. A missing prefix on a well formed address is an
/// [`ValidationError::InvalidPrefixLength`]; a second `/` makes the address malformed.
pub fn calculate_cidr(cidr_text: &str) -> Result<SubnetReport, ValidationError> {
    let (address_text, prefix_text) = split_cidr(cidr_text)?;
    calculate(address_text, prefix_text)
}

/// Split `a.b.c.d/p` into address and prefix text.
pub fn split_cidr(cidr_text: &str) -> Result<(&str, &str), ValidationError> {
    let cidr_text = cidr_text.trim();
    let parts: Vec<&str> = cidr_text.split('/').collect();
    match parts.as_slice() {
        [address, prefix] => Ok((*address, *prefix)),
        [address] => {
            parse_addr(address)?;
            Err(ValidationError::invalid_prefix_length(""))
        }
        _ => Err(ValidationError::malformed_address(cidr_text)),
    }
}
