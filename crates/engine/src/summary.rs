use serde::{Deserialize, Serialize};

use crate::{Entry, Money};

/// Totals derived from the entry list.
///
/// `total == income + expense` always holds; `expense` stays negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: Money,
    pub income: Money,
    pub expense: Money,
}

/// Reduces the entries into total, income and expense figures.
pub fn compute_summary(entries: &[Entry]) -> Summary {
    entries
        .iter()
        .map(|entry| entry.amount)
        .fold(Summary::default(), |mut acc, amount| {
            acc.total += amount;
            if amount.is_positive() {
                acc.income += amount;
            } else if amount.is_negative() {
                acc.expense += amount;
            }
            acc
        })
}
