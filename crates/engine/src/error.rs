//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] returned when an entry id is not in the ledger.
//! - [`InvalidAmount`] returned when an amount cannot be parsed, is zero,
//!   or would push the ledger totals out of range.
//! - [`InvalidText`] returned when a description is empty.
//! - [`InvalidDate`] returned when a date is not in `YYYY-MM-DD` form.
//! - [`UnsupportedCurrency`] returned when a currency code is not known.
//!
//! The aggregation functions never fail; only ledger mutations and input
//! parsing do.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidText`]: EngineError::InvalidText
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`UnsupportedCurrency`]: EngineError::UnsupportedCurrency
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid text: {0}")]
    InvalidText(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
