//! Money type for representing record amounts
//!
//! Internally stores amounts in cents (i64) so that sums and equality checks
//! are exact. Renders in the shortest decimal form: `100`, `100.5`, `100.25`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use wallet::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract an amount, `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts `digits` or `digits.digits` with an optional leading `-`.
    /// Fractional digits past the second must be zeros (`100.000` is fine,
    /// `1.005` is not).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) if !fraction.is_empty() => (whole, fraction),
            Some(_) => return Err(invalid()),
            None => (body, ""),
        };

        if whole.is_empty()
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        if fraction.len() > 2 && fraction.bytes().skip(2).any(|b| b != b'0') {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let units: i64 = whole.parse().map_err(|_| MoneyParseError::Overflow(s.to_string()))?;
        let cents_part = match fraction.len() {
            0 => 0,
            1 => i64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction[..2].parse::<i64>().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .ok_or_else(|| MoneyParseError::Overflow(s.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (units, cents) = (abs / 100, abs % 100);

        if cents == 0 {
            write!(f, "{}{}", sign, units)
        } else if cents % 10 == 0 {
            write!(f, "{}{}.{}", sign, units, cents / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, units, cents)
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    Overflow(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            Self::TooPrecise(s) => write!(f, "'{}' has more than two decimal places", s),
            Self::Overflow(s) => write!(f, "'{}' is too large", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shortest_form() {
        assert_eq!(Money::from_cents(10000).to_string(), "100");
        assert_eq!(Money::from_cents(10050).to_string(), "100.5");
        assert_eq!(Money::from_cents(10025).to_string(), "100.25");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0");
        assert_eq!(Money::from_cents(-2050).to_string(), "-20.5");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("100").unwrap().cents(), 10000);
        assert_eq!(Money::parse("100.0").unwrap().cents(), 10000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.05").unwrap().cents(), 1005);
        assert_eq!(Money::parse("0.50000").unwrap().cents(), 50);
        assert_eq!(Money::parse("-3").unwrap().cents(), -300);
        assert_eq!(Money::parse(" 7 ").unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "1.", ".5", "1.2.3", "1,5", "$10", "+5", "1e3", "--1"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::InvalidFormat(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_sub_cent_precision() {
        assert!(matches!(
            Money::parse("1.005"),
            Err(MoneyParseError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for cents in [0, 1, 10, 99, 100, 12345, 1_000_000] {
            let m = Money::from_cents(cents);
            assert_eq!(Money::parse(&m.to_string()).unwrap(), m);
        }
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_units(150);
        let b = Money::from_units(30);
        assert_eq!(a.checked_sub(b).unwrap().cents(), 12000);
        assert_eq!(b.checked_sub(a).unwrap().to_string(), "-120");
        assert_eq!(a.checked_add(b), Some(Money::from_units(180)));

        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::from_cents(2)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
