use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg},
};

use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError};

/// Signed money amount represented as integer **minor units** of the
/// ledger currency.
///
/// Use this type for **all** monetary values (entry amounts, totals) to avoid
/// floating-point drift. Floating point only appears when a proportion is
/// turned into a percentage.
///
/// The value is signed:
/// - positive = income
/// - negative = expense
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, Money};
///
/// let amount = Money::new(-35_000);
/// assert_eq!(amount.format(Currency::Krw), "-35,000원");
/// assert_eq!(Money::new(123_450).format(Currency::Eur), "1,234.50€");
/// ```
///
/// Parsing from user input:
///
/// ```rust
/// use engine::{Currency, Money};
///
/// assert_eq!(Money::parse_major("35,000", Currency::Krw).unwrap().minor(), 35_000);
/// assert_eq!(Money::parse_major("10,5", Currency::Eur).unwrap().minor(), 1_050);
/// assert!(Money::parse_major("12.345", Currency::Eur).is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value (saturating at `i64::MAX`).
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Formats the amount for display in `currency`.
    ///
    /// The output is deterministic and sign-preserving: digits are grouped by
    /// thousands with `,`, fraction digits follow `currency.minor_units()`,
    /// and the currency symbol is placed the way the currency writes it.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = currency.scale().unsigned_abs();
        let major = group_thousands(abs / scale);
        let digits = match currency.minor_units() {
            0 => major,
            width => format!(
                "{major}.{minor:0width$}",
                minor = abs % scale,
                width = usize::from(width)
            ),
        };

        if currency.symbol_first() {
            format!("{sign}{}{digits}", currency.symbol())
        } else {
            format!("{sign}{digits}{}", currency.symbol())
        }
    }

    /// Formats the amount the way a user would type it: no grouping, no
    /// symbol. `parse_major` reads the result back unchanged.
    #[must_use]
    pub fn format_plain(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = currency.scale().unsigned_abs();
        match currency.minor_units() {
            0 => format!("{sign}{abs}"),
            width => format!(
                "{sign}{}.{:0width$}",
                abs / scale,
                abs % scale,
                width = usize::from(width)
            ),
        }
    }

    /// Parses a human-entered amount in major units into minor units.
    ///
    /// Accepts an optional leading `+`/`-`. For currencies without minor
    /// units, `,` is a thousands separator. For currencies with minor units,
    /// `,` is the decimal separator unless the input also contains a `.`, in
    /// which case `,` groups thousands.
    ///
    /// Validation rules:
    /// - at most `minor_units` fractional digits
    /// - rejects empty/invalid strings and overflowing values
    pub fn parse_major(input: &str, currency: Currency) -> Result<Self, EngineError> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("invalid amount: {}", input.trim()));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let normalized = if currency.minor_units() == 0 || rest.contains('.') {
            rest.replace(',', "")
        } else {
            rest.replace(',', ".")
        };

        let mut parts = normalized.split('.');
        let major_str = parts.next().ok_or_else(invalid)?;
        let frac_str = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let major: i64 = major_str.parse().map_err(|_| overflow())?;

        let minor_units = usize::from(currency.minor_units());
        let minor: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                if frac.len() > minor_units {
                    return Err(EngineError::InvalidAmount("too many decimals".to_string()));
                }
                let padded = format!("{frac:0<minor_units$}");
                padded.parse().map_err(|_| invalid())?
            }
        };

        let total = major
            .checked_mul(currency.scale())
            .and_then(|v| v.checked_add(minor))
            .ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money(signed))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
