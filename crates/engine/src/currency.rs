use serde::{Deserialize, Serialize};

use crate::EngineError;

/// ISO-like currency code used by the ledger and its money values.
///
/// The ledger is mono-currency: every entry is expressed in the currency the
/// application was started with (default `KRW`).
///
/// ## Minor units
///
/// Amounts are stored as an `i64` number of **minor units** (see `Money`).
/// `minor_units()` returns how many decimal digits are used when converting
/// between:
/// - major units (human input/output, e.g. `10.50 EUR`)
/// - minor units (stored integers, e.g. `1050`)
///
/// Example: EUR has 2 minor units, so `10.50 EUR` ⇄ `1050`. KRW has none, so
/// `35,000원` ⇄ `35000`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Currency {
    #[default]
    Krw,
    Eur,
    Usd,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Krw => "KRW",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Krw => 0,
            Currency::Eur | Currency::Usd => 2,
        }
    }

    /// Symbol written next to a formatted amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Krw => "원",
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }

    /// Whether the symbol goes before the digits (`$12.00`) or after them
    /// (`12.00€`, `12,000원`).
    #[must_use]
    pub const fn symbol_first(self) -> bool {
        matches!(self, Currency::Usd)
    }

    /// `10^minor_units`, the number of minor units in one major unit.
    #[must_use]
    pub const fn scale(self) -> i64 {
        let mut scale = 1i64;
        let mut digits = self.minor_units();
        while digits > 0 {
            scale *= 10;
            digits -= 1;
        }
        scale
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "KRW" => Ok(Currency::Krw),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(EngineError::UnsupportedCurrency(other.to_string())),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
