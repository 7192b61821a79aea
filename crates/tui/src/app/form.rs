//! Add and edit forms.
//!
//! Forms hold raw text exactly as typed; parsing happens on submit so a
//! half-typed amount never reaches the ledger.

use chrono::{Days, NaiveDate};
use engine::{Category, Currency, Entry, EntryId, EntryKind, EntryUpdate, Money, NewEntry, parse_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Kind,
    Text,
    Amount,
    Date,
    Category,
}

impl AddField {
    const ORDER: [AddField; 5] = [
        AddField::Kind,
        AddField::Text,
        AddField::Amount,
        AddField::Date,
        AddField::Category,
    ];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ORDER[next]
    }
}

#[derive(Debug, Clone)]
pub struct AddForm {
    pub kind: EntryKind,
    pub text: String,
    pub amount: String,
    pub date: String,
    pub category: usize,
    pub focus: AddField,
    pub error: Option<String>,
}

impl AddForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: EntryKind::Expense,
            text: String::new(),
            amount: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            category: default_category_index(),
            focus: AddField::Text,
            error: None,
        }
    }

    /// Clears the inputs after a successful add. The kind toggle is kept.
    pub fn reset(&mut self, today: NaiveDate) {
        let kind = self.kind;
        *self = Self::new(today);
        self.kind = kind;
    }

    pub fn category(&self) -> Category {
        Category::KNOWN[self.category % Category::KNOWN.len()].clone()
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.step(true);
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.step(false);
    }

    /// Left/right on a selector field.
    pub fn cycle(&mut self, forward: bool) {
        match self.focus {
            AddField::Kind => self.kind = self.kind.toggled(),
            AddField::Category => {
                let len = Category::KNOWN.len();
                self.category = if forward {
                    (self.category + 1) % len
                } else {
                    (self.category + len - 1) % len
                };
            }
            AddField::Date => {
                if let Ok(date) = parse_date(&self.date) {
                    let shifted = if forward {
                        date.checked_add_days(Days::new(1))
                    } else {
                        date.checked_sub_days(Days::new(1))
                    };
                    if let Some(shifted) = shifted {
                        self.date = shifted.format("%Y-%m-%d").to_string();
                    }
                }
            }
            AddField::Text | AddField::Amount => {}
        }
    }

    pub fn push(&mut self, ch: char) {
        match self.focus {
            AddField::Text => self.text.push(ch),
            AddField::Amount => self.amount.push(ch),
            AddField::Date => self.date.push(ch),
            AddField::Kind if ch == ' ' => self.kind = self.kind.toggled(),
            AddField::Kind | AddField::Category => {}
        }
    }

    pub fn pop(&mut self) {
        match self.focus {
            AddField::Text => {
                self.text.pop();
            }
            AddField::Amount => {
                self.amount.pop();
            }
            AddField::Date => {
                self.date.pop();
            }
            AddField::Kind | AddField::Category => {}
        }
    }

    /// Validates the inputs into a ledger command.
    pub fn parse(&self, currency: Currency) -> Result<NewEntry, String> {
        if self.text.trim().is_empty() || self.amount.trim().is_empty() {
            return Err("Enter both a description and an amount.".to_string());
        }
        let amount = Money::parse_major(&self.amount, currency).map_err(|err| err.to_string())?;
        let date = parse_date(&self.date).map_err(|err| err.to_string())?;

        Ok(NewEntry {
            kind: self.kind,
            text: self.text.trim().to_string(),
            amount: amount.abs(),
            category: self.category(),
            date,
            memo: String::new(),
        })
    }
}

fn default_category_index() -> usize {
    Category::Other.known_index().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Text,
    Amount,
    Memo,
}

impl EditField {
    fn step(self, forward: bool) -> Self {
        match (self, forward) {
            (Self::Text, true) | (Self::Memo, false) => Self::Amount,
            (Self::Amount, true) | (Self::Text, false) => Self::Memo,
            (Self::Memo, true) | (Self::Amount, false) => Self::Text,
        }
    }
}

/// Inline edit of one entry: description, amount magnitude and memo.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub id: EntryId,
    pub text: String,
    pub amount: String,
    pub memo: String,
    pub focus: EditField,
    pub error: Option<String>,
}

impl EditForm {
    pub fn for_entry(entry: &Entry, currency: Currency) -> Self {
        Self {
            id: entry.id,
            text: entry.text.clone(),
            amount: entry.amount.abs().format_plain(currency),
            memo: entry.memo.clone(),
            focus: EditField::Text,
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.step(true);
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.step(false);
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            EditField::Text => &mut self.text,
            EditField::Amount => &mut self.amount,
            EditField::Memo => &mut self.memo,
        }
    }

    pub fn push(&mut self, ch: char) {
        self.field_mut().push(ch);
    }

    pub fn pop(&mut self) {
        self.field_mut().pop();
    }

    /// The typed sign is ignored; the ledger keeps the entry's own sign.
    pub fn parse(&self, currency: Currency) -> Result<EntryUpdate, String> {
        if self.text.trim().is_empty() || self.amount.trim().is_empty() {
            return Err("Enter both a description and an amount.".to_string());
        }
        let amount = Money::parse_major(&self.amount, currency).map_err(|err| err.to_string())?;
        Ok(EntryUpdate {
            text: self.text.clone(),
            amount: amount.abs(),
            memo: self.memo.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 23).unwrap()
    }

    #[test]
    fn new_form_defaults_to_today_and_other() {
        let form = AddForm::new(today());
        assert_eq!(form.date, "2024-07-23");
        assert_eq!(form.category(), Category::Other);
        assert_eq!(form.kind, EntryKind::Expense);
    }

    #[test]
    fn parse_requires_text_and_amount() {
        let mut form = AddForm::new(today());
        form.text = "Lunch".to_string();
        assert!(form.parse(Currency::Krw).is_err());

        form.amount = "12,000".to_string();
        let parsed = form.parse(Currency::Krw).unwrap();
        assert_eq!(parsed.amount, Money::new(12_000));
        assert_eq!(parsed.date, today());

        form.date = "tomorrow".to_string();
        assert!(form.parse(Currency::Krw).is_err());
    }

    #[test]
    fn selectors_cycle_with_arrows() {
        let mut form = AddForm::new(today());
        form.focus = AddField::Category;
        form.cycle(true);
        assert_eq!(form.category(), Category::Food);
        form.cycle(false);
        assert_eq!(form.category(), Category::Other);

        form.focus = AddField::Date;
        form.cycle(true);
        assert_eq!(form.date, "2024-07-24");

        form.focus = AddField::Kind;
        form.cycle(true);
        assert_eq!(form.kind, EntryKind::Income);
    }

    #[test]
    fn reset_keeps_kind_only() {
        let mut form = AddForm::new(today());
        form.kind = EntryKind::Income;
        form.text = "Bonus".to_string();
        form.category = 0;
        form.reset(today());
        assert_eq!(form.kind, EntryKind::Income);
        assert!(form.text.is_empty());
        assert_eq!(form.category(), Category::Other);
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = AddForm::new(today());
        form.focus = AddField::Category;
        form.next_field();
        assert_eq!(form.focus, AddField::Kind);
        form.prev_field();
        assert_eq!(form.focus, AddField::Category);

        assert_eq!(EditField::Memo.step(true), EditField::Text);
        assert_eq!(EditField::Text.step(false), EditField::Memo);
    }
}
