//! Domain layer: entities, errors, and the registry state machine.
//!
//! Nothing in this module knows about transport, settlement backends, or
//! event delivery. Those concerns live behind the traits in `crate::ports`.

pub mod entities;
pub mod errors;
pub mod registry;

pub use entities::*;
pub use errors::*;
pub use registry::*;
