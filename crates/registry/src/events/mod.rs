//! # Observability Events
//!
//! Payloads delivered to external indexers through the `EventSink` port.
//!
//! One event per successful mutation:
//!
//! - `StarCreated`: a new record was registered
//! - `StarListed`: a sale listing was created or re-priced
//! - `SaleCompleted`: a purchase settled and ownership moved
//! - `StarTransferred`: ownership moved without payment
//! - `StarsExchanged`: two owners swapped records

pub mod payloads;

pub use payloads::*;
