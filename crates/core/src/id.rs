//! Strongly-typed identifiers used across the domain.

use core::num::IntErrorKind;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a car in the dealership inventory.
///
/// Assigned sequentially by the registry (starting at 1) and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(u32);

impl CarId {
    /// The first identifier handed out by an empty registry.
    pub const FIRST: CarId = CarId(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identifier following this one, or `None` on `u32` overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for CarId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Parses an id typed by a user: a positive integer, surrounding whitespace
/// allowed. Zero is rejected because the registry never assigns it.
impl FromStr for CarId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let raw = trimmed.parse::<u32>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => {
                DomainError::invalid_id("car ID value is out of acceptable range")
            }
            _ => DomainError::invalid_id(format!(
                "car ID must be a positive integer, got {trimmed:?}"
            )),
        })?;

        if raw == 0 {
            return Err(DomainError::invalid_id("car ID must be a positive integer"));
        }
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_surrounding_whitespace() {
        assert_eq!(" 42 ".parse::<CarId>().unwrap(), CarId::new(42));
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "abc".parse::<CarId>().unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_id(r#"car ID must be a positive integer, got "abc""#)
        );
        assert!("-1".parse::<CarId>().is_err());
        assert!("12abc".parse::<CarId>().is_err());
        assert!("".parse::<CarId>().is_err());
    }

    #[test]
    fn rejects_zero_and_overflow() {
        assert!("0".parse::<CarId>().is_err());

        let err = "99999999999".parse::<CarId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.contains("out of acceptable range")));
        assert_eq!("4294967295".parse::<CarId>().unwrap(), CarId::new(u32::MAX));
    }

    #[test]
    fn next_stops_at_overflow() {
        assert_eq!(CarId::new(7).next(), Some(CarId::new(8)));
        assert_eq!(CarId::new(u32::MAX).next(), None);
    }
}
