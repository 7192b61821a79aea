//! Entry categories.
//!
//! A category is a plain label, not a foreign entity. The selector offers a
//! fixed set of known categories, but free text is accepted too and kept as
//! [`Category::Custom`] after normalization.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Serialized as its plain label; any string deserializes through
/// [`Category::from_text`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Subscription,
    Event,
    Salary,
    #[default]
    Other,
    Custom(String),
}

impl Category {
    /// The categories offered by the add form, in selector order.
    pub const KNOWN: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Subscription,
        Category::Event,
        Category::Salary,
        Category::Other,
    ];

    pub fn label(&self) -> &str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Subscription => "subscription",
            Self::Event => "event",
            Self::Salary => "salary",
            Self::Other => "other",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// Builds a category from free text.
    ///
    /// The text is NFKC-normalized, trimmed and lowercased; text matching a
    /// known label yields that variant, blank text yields [`Category::Other`].
    pub fn from_text(text: &str) -> Self {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Self::Other;
        }
        Self::KNOWN
            .iter()
            .find(|known| known.label() == normalized)
            .cloned()
            .unwrap_or(Self::Custom(normalized))
    }

    /// Position in [`Category::KNOWN`], `None` for custom categories.
    pub fn known_index(&self) -> Option<usize> {
        Self::KNOWN.iter().position(|known| known == self)
    }
}

fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().trim().to_lowercase()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_string()
    }
}
