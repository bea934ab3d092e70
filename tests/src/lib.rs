//! # NewsArchive Client Test Suite
//!
//! Unified test crate for cross-crate flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Wallet → contract → reader choreography
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p archive-tests
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
