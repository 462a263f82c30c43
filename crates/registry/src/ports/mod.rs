//! Ports: trait boundaries between the registry and its environment.

pub mod outbound;

pub use outbound::*;
