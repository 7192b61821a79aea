//! One-line entry input: `[-|+]amount description [#category]`.
//!
//! Without a sign the entry is an expense. The date is today.

use chrono::NaiveDate;
use engine::{Category, Currency, EntryKind, Money, NewEntry};

pub fn parse(input: &str, currency: Currency, today: NaiveDate) -> Result<NewEntry, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Type an amount and a description.".to_string());
    }

    let (kind, rest) = if let Some(stripped) = trimmed.strip_prefix('+') {
        (EntryKind::Income, stripped.trim_start())
    } else if let Some(stripped) = trimmed.strip_prefix('-') {
        (EntryKind::Expense, stripped.trim_start())
    } else {
        (EntryKind::Expense, trimmed)
    };

    let mut parts = rest.splitn(2, ' ');
    let amount_raw = parts.next().unwrap_or("").trim();
    if amount_raw.is_empty() {
        return Err("Missing amount.".to_string());
    }
    let text_raw = parts.next().unwrap_or("").trim();

    let amount = Money::parse_major(amount_raw, currency)
        .map_err(|_| format!("Invalid amount: {amount_raw}"))?
        .abs();
    if amount.is_zero() {
        return Err("Amount must be greater than 0.".to_string());
    }

    let (category, text) = parse_tag(text_raw)?;
    if text.is_empty() {
        return Err("Missing description.".to_string());
    }

    Ok(NewEntry {
        kind,
        text,
        amount,
        category: category.unwrap_or_default(),
        date: today,
        memo: String::new(),
    })
}

fn parse_tag(text_raw: &str) -> Result<(Option<Category>, String), String> {
    let mut tag: Option<Category> = None;
    let mut kept: Vec<&str> = Vec::new();

    for token in text_raw.split_whitespace() {
        match token.strip_prefix('#') {
            Some(rest) if !rest.is_empty() => {
                if tag.is_some() {
                    return Err("Only one #category allowed.".to_string());
                }
                tag = Some(Category::from_text(rest));
            }
            _ => kept.push(token),
        }
    }

    Ok((tag, kept.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 23).unwrap()
    }

    #[test]
    fn unsigned_input_is_an_expense() {
        let parsed = parse("12,000 coffee beans #food", Currency::Krw, today()).unwrap();
        assert_eq!(parsed.kind, EntryKind::Expense);
        assert_eq!(parsed.amount, Money::new(12_000));
        assert_eq!(parsed.text, "coffee beans");
        assert_eq!(parsed.category, Category::Food);
        assert_eq!(parsed.date, today());
    }

    #[test]
    fn plus_sign_records_income() {
        let parsed = parse("+ 50000 side job", Currency::Krw, today()).unwrap();
        assert_eq!(parsed.kind, EntryKind::Income);
        assert_eq!(parsed.category, Category::Other);
        assert_eq!(parsed.text, "side job");
    }

    #[test]
    fn free_text_tag_becomes_custom_category() {
        let parsed = parse("-9.99 vet #Pets", Currency::Eur, today()).unwrap();
        assert_eq!(parsed.amount, Money::new(999));
        assert_eq!(parsed.category, Category::Custom("pets".to_string()));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("", Currency::Krw, today()).is_err());
        assert!(parse("abc lunch", Currency::Krw, today()).is_err());
        assert!(parse("0 lunch", Currency::Krw, today()).is_err());
        assert!(parse("5000", Currency::Krw, today()).is_err());
        assert!(parse("5000 #food", Currency::Krw, today()).is_err());
        assert!(parse("5000 lunch #food #event", Currency::Krw, today()).is_err());
    }
}
