//! Ledger entries.
//!
//! An [`Entry`] is one income or expense record. Its amount is signed:
//! negative for expenses, positive for income. Entries are only created,
//! edited and removed through [`Ledger`](crate::Ledger).

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, Money, ResultEngine};

/// Stable identifier of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether an entry takes money out or brings it in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    #[default]
    Expense,
    Income,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Applies this kind's sign to the magnitude of `amount`.
    #[must_use]
    pub fn signed(self, amount: Money) -> Money {
        match self {
            Self::Expense => -amount.abs(),
            Self::Income => amount.abs(),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Expense => Self::Income,
            Self::Income => Self::Expense,
        }
    }
}


#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub memo: String,
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        if self.amount.is_negative() {
            EntryKind::Expense
        } else {
            EntryKind::Income
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

/// Input of [`Ledger::add`](crate::Ledger::add).
///
/// `amount` is a magnitude; its sign is ignored and replaced by `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub kind: EntryKind,
    pub text: String,
    pub amount: Money,
    #[serde(default)]
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub memo: String,
}

/// Input of [`Ledger::update`](crate::Ledger::update).
///
/// Only description, amount magnitude and memo can change; category and date
/// are fixed at creation. The stored sign always stays the original one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryUpdate {
    pub text: String,
    pub amount: Money,
    pub memo: String,
}

/// Parse an ISO `YYYY-MM-DD` date coming from user input.
pub fn parse_date(value: &str) -> ResultEngine<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(format!("expected YYYY-MM-DD, got \"{}\"", value.trim())))
}
