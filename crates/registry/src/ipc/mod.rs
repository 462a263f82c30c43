//! IPC boundary: call payloads and the authenticated-call handler.
//!
//! The external transaction layer is the only caller of this module. It
//! supplies, per call, a `CallContext` holding the authenticated caller
//! identity and the attached native value. Payloads never carry a caller
//! field; the context is the sole authority on identity.

pub mod calls;
pub mod handler;

pub use calls::*;
pub use handler::*;
