//! Pocketbook engine: the in-memory ledger and everything derived from it.
//!
//! The crate has two pure transformations at its core:
//!
//! - [`compute_summary`] reduces the entries into total, income and expense.
//! - [`analyze_categories`] ranks expense categories and partitions `[0, 100)`
//!   into chart ranges.
//!
//! [`Ledger`] owns the entries and exposes add/edit/delete; [`ReportCache`]
//! re-derives both transformations when the ledger revision changes.

pub use analysis::{CategoryAnalysis, CategoryTotal, ChartRange, PALETTE_SIZE, analyze_categories};
pub use category::Category;
pub use currency::Currency;
pub use entry::{Entry, EntryId, EntryKind, EntryUpdate, NewEntry, parse_date};
pub use error::EngineError;
pub use ledger::Ledger;
pub use money::Money;
pub use report::{Report, ReportCache};
pub use summary::{Summary, compute_summary};

mod analysis;
mod category;
mod currency;
mod entry;
mod error;
mod ledger;
mod money;
mod report;
pub mod seed;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;
