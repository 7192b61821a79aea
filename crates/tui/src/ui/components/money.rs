use engine::{Currency, Money};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Semantic colour of an amount: green for income, red for expense.
#[must_use]
pub fn amount_color(amount: Money, theme: &Theme) -> Color {
    if amount.is_positive() {
        theme.positive
    } else if amount.is_negative() {
        theme.negative
    } else {
        theme.text
    }
}

/// Creates a styled span for a money amount with semantic coloring.
///
/// - Positive amounts: green with `+` prefix
/// - Negative amounts: red, negative sign shown
/// - Zero: neutral text color
#[must_use]
pub fn styled_amount(amount: Money, currency: Currency, theme: &Theme) -> Span<'static> {
    let prefix = if amount.is_positive() { "+" } else { "" };
    Span::styled(
        format!("{prefix}{}", amount.format(currency)),
        Style::default().fg(amount_color(amount, theme)),
    )
}

/// Formats a share of the expense total with one decimal place.
#[must_use]
pub fn format_percentage(percent: f64) -> String {
    format!("{percent:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_gets_a_plus_and_positive_colour() {
        let theme = Theme::dark();
        let span = styled_amount(Money::new(3_000_000), Currency::Krw, &theme);
        assert_eq!(span.content, "+3,000,000원");
        assert_eq!(span.style.fg, Some(theme.positive));
    }

    #[test]
    fn expense_keeps_its_minus() {
        let theme = Theme::dark();
        let span = styled_amount(Money::new(-35_000), Currency::Krw, &theme);
        assert_eq!(span.content, "-35,000원");
        assert_eq!(span.style.fg, Some(theme.negative));

        let zero = styled_amount(Money::ZERO, Currency::Eur, &theme);
        assert_eq!(zero.content, "0.00€");
        assert_eq!(zero.style.fg, Some(theme.text));
    }

    #[test]
    fn percentages_have_one_decimal() {
        assert_eq!(format_percentage(69.04), "69.0%");
        assert_eq!(format_percentage(30.96), "31.0%");
        assert_eq!(format_percentage(100.0), "100.0%");
    }
}
