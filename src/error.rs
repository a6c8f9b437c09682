//! Validation errors for subnet calculation input.

/// A rejected request. Both kinds are ordinary user-input errors; the caller decides
/// how to show them and what to reset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Wrong segment count, or a segment that is not a number in 0-255.
    #[error("Invalid IP Address format '{input}'. Enter 4 numbers (0-255) separated with a dot.")]
    MalformedAddress { input: String },

    /// Prefix text is not an integer, or lies outside 0-32.
    #[error("Invalid input '{input}'. Subnet prefix length must be 0-32.")]
    InvalidPrefixLength { input: String },
}

impl ValidationError {
    pub fn malformed_address(input: &str) -> Self {
        ValidationError::MalformedAddress {
            input: input.to_string(),
        }
    }

    pub fn invalid_prefix_length(input: &str) -> Self {
        ValidationError::InvalidPrefixLength {
            input: input.to_string(),
        }
    }
}
