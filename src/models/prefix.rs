//! CIDR prefix length.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A prefix length known to be in `0..=32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Returns `None` when `len > 32`.
    pub fn new(len: u8) -> Option<PrefixLength> {
        if len > MAX_LENGTH {
            None
        } else {
            Some(PrefixLength(len))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of host bits, `32 - len`.
    pub fn host_bits(self) -> u32 {
        u32::from(MAX_LENGTH - self.0)
    }
}

impl TryFrom<i64> for PrefixLength {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(PrefixLength::new)
            .ok_or_else(|| ValidationError::invalid_prefix_length(&value.to_string()))
    }
}

impl From<PrefixLength> for u8 {
    fn from(prefix: PrefixLength) -> u8 {
        prefix.0
    }
}

impl FromStr for PrefixLength {
    type Err = ValidationError;

    /// Parses a signed decimal integer and range checks it, so `-1` and `33` fail
    /// the same way as `abc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let value: i64 = text
            .parse()
            .map_err(|_| ValidationError::invalid_prefix_length(text))?;
        PrefixLength::try_from(value).map_err(|_| ValidationError::invalid_prefix_length(text))
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix_valid() {
        assert_eq!("0".parse::<PrefixLength>().unwrap().get(), 0);
        assert_eq!("24".parse::<PrefixLength>().unwrap().get(), 24);
        assert_eq!(" 32 ".parse::<PrefixLength>().unwrap().get(), 32);
        assert_eq!("+8".parse::<PrefixLength>().unwrap().get(), 8);
    }

    #[test]
    fn test_parse_prefix_out_of_range() {
        assert_eq!(
            "33".parse::<PrefixLength>().unwrap_err(),
            ValidationError::invalid_prefix_length("33")
        );
        assert_eq!(
            "-1".parse::<PrefixLength>().unwrap_err(),
            ValidationError::invalid_prefix_length("-1")
        );
    }

    #[test]
    fn test_parse_prefix_not_a_number() {
        assert!("".parse::<PrefixLength>().is_err());
        assert!("abc".parse::<PrefixLength>().is_err());
        assert!("2.4".parse::<PrefixLength>().is_err());
        assert!("99999999999999999999999".parse::<PrefixLength>().is_err());
    }

    #[test]
    fn test_host_bits() {
        assert_eq!(PrefixLength::new(0).unwrap().host_bits(), 32);
        assert_eq!(PrefixLength::new(24).unwrap().host_bits(), 8);
        assert_eq!(PrefixLength::new(32).unwrap().host_bits(), 0);
        assert!(PrefixLength::new(33).is_none());
    }

    #[test]
    fn test_prefix_serde() {
        let prefix = PrefixLength::new(24).unwrap();
        assert_eq!(serde_json::to_string(&prefix).unwrap(), "24");
        assert_eq!(serde_json::from_str::<PrefixLength>("16").unwrap().get(), 16);
        assert!(serde_json::from_str::<PrefixLength>("40").is_err());
    }
}
