//! Subnet calculation.
//!
//! - `calculate` - validation followed by derivation of a [`crate::models::SubnetReport`]

mod calculate;

pub use calculate::{calculate, calculate_cidr, split_cidr};
