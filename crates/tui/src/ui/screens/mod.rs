pub mod analysis;
pub mod ledger;
