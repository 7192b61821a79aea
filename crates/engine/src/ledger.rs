//! The in-memory entry list.
//!
//! [`Ledger`] is the single source of truth: it owns every [`Entry`], keeps
//! them sorted by date (newest first) and bumps a revision counter on every
//! mutation so derived values know when to recompute (see
//! [`ReportCache`](crate::ReportCache)).
//!
//! The sum of all entry magnitudes is kept within `i64`, so every total
//! derived from the entries (balance, income, expense, per category) fits
//! in a [`Money`](crate::Money) without overflow.

use crate::{Entry, EntryId, EntryUpdate, EngineError, Money, NewEntry, ResultEngine};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
    revision: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from already-validated entries, sorting them by date.
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut entries: Vec<Entry> = entries.into_iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Self {
            entries,
            revision: 0,
        }
    }

    /// Entries sorted by date, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter bumped by every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Records a new entry and returns its id.
    ///
    /// The stored amount takes its sign from `new.kind`. Among entries with
    /// the same date the new one is placed first.
    pub fn add(&mut self, new: NewEntry) -> ResultEngine<EntryId> {
        let text = validate_text(&new.text)?;
        validate_amount(new.amount)?;
        self.check_capacity(None, new.amount)?;

        let entry = Entry {
            id: EntryId::new(),
            text,
            amount: new.kind.signed(new.amount),
            category: new.category,
            date: new.date,
            memo: new.memo.trim().to_string(),
        };
        let id = entry.id;

        let index = self
            .entries
            .iter()
            .position(|existing| existing.date <= entry.date)
            .unwrap_or(self.entries.len());
        tracing::debug!(%id, date = %entry.date, amount = entry.amount.minor(), "entry added");
        self.entries.insert(index, entry);
        self.touch();
        Ok(id)
    }

    /// Replaces description, amount and memo of an entry.
    ///
    /// The entry keeps its expense/income classification: the magnitude of
    /// `update.amount` is stored with the original sign.
    pub fn update(&mut self, id: EntryId, update: EntryUpdate) -> ResultEngine<()> {
        let text = validate_text(&update.text)?;
        validate_amount(update.amount)?;
        self.check_capacity(Some(id), update.amount)?;

        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;

        entry.text = text;
        entry.amount = entry.kind().signed(update.amount);
        entry.memo = update.memo.trim().to_string();
        tracing::debug!(%id, amount = entry.amount.minor(), "entry updated");
        self.touch();
        Ok(())
    }

    /// Removes an entry and returns it.
    pub fn remove(&mut self, id: EntryId) -> ResultEngine<Entry> {
        let index = self
            .position(id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        let removed = self.entries.remove(index);
        tracing::debug!(%id, "entry removed");
        self.touch();
        Ok(removed)
    }

    /// Fails when storing `amount` (in place of entry `replacing`, if any)
    /// would push the sum of magnitudes past `i64::MAX`.
    fn check_capacity(&self, replacing: Option<EntryId>, amount: Money) -> ResultEngine<()> {
        self.entries
            .iter()
            .filter(|entry| Some(entry.id) != replacing)
            .try_fold(amount.abs(), |sum, entry| sum.checked_add(entry.amount.abs()))
            .map(|_| ())
            .ok_or_else(|| {
                EngineError::InvalidAmount("amount too large for the ledger".to_string())
            })
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn validate_text(text: &str) -> ResultEngine<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidText(
            "description must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: Money) -> ResultEngine<()> {
    if amount.is_zero() {
        return Err(EngineError::InvalidAmount(
            "amount must be different from 0".to_string(),
        ));
    }
    Ok(())
}
