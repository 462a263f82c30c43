//! In-memory adapters for the outbound ports.

pub mod ledger;
pub mod sink;

pub use ledger::*;
pub use sink::*;
