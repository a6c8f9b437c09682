//! Domain models for the subnet calculator.
//!
//! - `ipv4` - address parsing/formatting and the `compute_*` operations
//! - [`PrefixLength`] - validated CIDR prefix length
//! - [`SubnetRequest`] and [`Subnet`] - validated input and derived values
//! - [`SubnetReport`] - derived values rendered as text

mod ipv4;
mod prefix;
mod report;
mod subnet;

// Re-export public types
pub use ipv4::{
    compute_broadcast, compute_first_usable, compute_last_usable, compute_mask, compute_network,
    compute_total_hosts, format_addr, from_octets, octets, parse_addr,
};
pub use prefix::{PrefixLength, MAX_LENGTH};
pub use report::{SubnetReport, LABELS};
pub use subnet::{Subnet, SubnetRequest};
