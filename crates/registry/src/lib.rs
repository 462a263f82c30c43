//! # star-registry
//!
//! The Star Notary registry subsystem.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: Authoritative mapping from star id to
//!   `(name, owner)` and from star id to active sale price
//! - **Marketplace State Machine**: create, list-for-sale, buy, transfer,
//!   and exchange, with authorization and payment settlement enforced here
//! - **Trusting Boundary**: caller identity and attached payment arrive
//!   already authenticated from the external transaction layer; the
//!   registry never verifies identity itself
//!
//! ## Call Flow
//!
//! ```text
//! [Transaction Layer] ──CallContext + request──→ [RegistryHandler (ipc)]
//!                                                       │
//!                                        guard ─────────┤
//!                                                       ↓
//!                                              [StarRegistry (domain)]
//!                                                       │
//!                                   ┌───────────────────┴───────────┐
//!                                   ↓                               ↓
//!                          [SettlementPort]                   [EventSink]
//!                         (credits + refunds)             (external indexers)
//! ```
//!
//! ## Guarantees
//!
//! - Every call completes fully or fails with no observable state change
//! - A sale settles payment and transfers ownership in one logical step
//! - Read accessors take `&self` and never mutate

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ipc;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use events::*;
pub use ipc::*;
pub use ports::*;
