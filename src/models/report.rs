//! Rendered result of a calculation.

use super::ipv4::format_addr;
use super::subnet::Subnet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display labels, in output order.
pub const LABELS: [&str; 6] = [
    "Mask",
    "Network",
    "First usable",
    "Last usable",
    "Broadcast",
    "Hosts",
];

/// The five derived addresses as dotted quads plus the usable host count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub mask: String,
    pub network: String,
    pub first_usable: String,
    pub last_usable: String,
    pub broadcast: String,
    /// `2^(32 - prefix) - 2`; `0` for /31 and `-1` for /32.
    pub total_hosts: i64,
}

impl SubnetReport {
    /// `false` for /31 and /32, where first and last usable are raw arithmetic only.
    pub fn has_usable_range(&self) -> bool {
        self.total_hosts > 0
    }

    /// Label/value pairs in [`LABELS`] order.
    pub fn rows(&self) -> [(&'static str, String); 6] {
        [
            (LABELS[0], self.mask.clone()),
            (LABELS[1], self.network.clone()),
            (LABELS[2], self.first_usable.clone()),
            (LABELS[3], self.last_usable.clone()),
            (LABELS[4], self.broadcast.clone()),
            (LABELS[5], self.total_hosts.to_string()),
        ]
    }
}

impl From<&Subnet> for SubnetReport {
    fn from(subnet: &Subnet) -> Self {
        SubnetReport {
            mask: format_addr(subnet.mask),
            network: format_addr(subnet.network),
            first_usable: format_addr(subnet.first_usable),
            last_usable: format_addr(subnet.last_usable),
            broadcast: format_addr(subnet.broadcast),
            total_hosts: subnet.total_hosts,
        }
    }
}

impl fmt::Display for SubnetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{:<14}{value}", format!("{label}:"))?;
        }
        Ok(())
    }
}
