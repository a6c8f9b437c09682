//! IPv4 subnet calculator.
//!
//! Derives mask, network, usable host range, broadcast and host count from a
//! dotted-quad address and a CIDR prefix length.
//!
//! ```
//! use subnet_calculator::calculate;
//! let report = calculate("10.0.0.5", "8").unwrap();
//! assert_eq!(report.network, "10.0.0.0");
//! assert_eq!(report.total_hosts, 16777214);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;

pub use error::ValidationError;
pub use models::SubnetReport;
pub use processing::{calculate, calculate_cidr};
