//! Subnet request and derived values.

use super::ipv4::{
    compute_broadcast, compute_first_usable, compute_last_usable, compute_mask, compute_network,
    compute_total_hosts, format_addr, parse_addr,
};
use super::prefix::PrefixLength;
use crate::error::ValidationError;
use std::fmt;

/// Validated input of one calculation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetRequest {
    /// Host address as entered, not yet masked.
    pub addr: u32,
    pub prefix: PrefixLength,
}

impl SubnetRequest {
    /// Validate address text, then prefix text. The first failure is returned.
    pub fn parse(address_text: &str, prefix_text: &str) -> Result<SubnetRequest, ValidationError> {
        let addr = parse_addr(address_text)?;
        let prefix: PrefixLength = prefix_text.parse()?;
        Ok(SubnetRequest { addr, prefix })
    }
}

impl fmt::Display for SubnetRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", format_addr(self.addr), self.prefix)
    }
}

/// Every value derived from a [`SubnetRequest`], as 32-bit addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    pub prefix: PrefixLength,
    pub mask: u32,
    pub network: u32,
    pub first_usable: u32,
    pub last_usable: u32,
    pub broadcast: u32,
    pub total_hosts: i64,
}

impl Subnet {
    pub fn derive(request: &SubnetRequest) -> Subnet {
        let mask = compute_mask(request.prefix);
        let network = compute_network(request.addr, mask);
        let broadcast = compute_broadcast(network, mask);
        Subnet {
            prefix: request.prefix,
            mask,
            network,
            first_usable: compute_first_usable(network),
            last_usable: compute_last_usable(broadcast),
            broadcast,
            total_hosts: compute_total_hosts(request.prefix),
        }
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", format_addr(self.network), self.prefix)
    }
}
