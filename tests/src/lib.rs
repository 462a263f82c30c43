//! # Star Notary Test Suite
//!
//! Unified test crate for cross-layer flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # Full marketplace scenarios through the handler
//!     └── concurrency.rs  # Concurrent read access to a shared registry
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p notary-tests
//! ```

pub mod integration;
