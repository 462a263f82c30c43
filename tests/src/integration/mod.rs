//! Cross-layer integration tests.

pub mod concurrency;
