//! Outbound (Driven) ports for the Star Registry.
//!
//! These traits define what the registry needs from its hosting
//! environment: a way to move native value, and a place to deliver
//! observability events.

use crate::domain::{Settlement, SettlementError};
use crate::events::RegistryEvent;

/// Native-value settlement backend.
///
/// On a live chain this is the host's value-transfer primitive; in tests
/// it is an in-memory ledger. Whatever the backend, `apply` is the only
/// entry point and it is all-or-nothing.
pub trait SettlementPort: Send + Sync {
    /// Applies every credit in `settlement`, or none of them.
    ///
    /// # Arguments
    /// - `settlement`: the full payment side of one sale (seller credit
    ///   plus any buyer refund)
    ///
    /// # Returns
    /// - `Ok(())`: every credit landed
    /// - `Err`: nothing was applied; the caller must not mutate ownership
    fn apply(&mut self, settlement: &Settlement) -> Result<(), SettlementError>;
}

/// Destination for registry observability events.
///
/// External indexers rely on these events; the payload shapes in
/// `crate::events` are contract surface. Delivery failures are the sink's
/// problem, not the registry's: a mutation that has committed is never
/// rolled back because an indexer was unreachable.
pub trait EventSink: Send + Sync {
    /// Delivers one event. Called after the corresponding state mutation
    /// has committed.
    fn emit(&mut self, event: RegistryEvent);
}

/// Sink that drops every event. For hosts that do no indexing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn emit(&mut self, _event: RegistryEvent) {}
}
