pub mod breakdown;
pub mod ledger;
pub mod regime;

pub use breakdown::{calculate, Breakdown, Contract, InputKind};
pub use regime::Regime;
