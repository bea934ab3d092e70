//! # Ports Module
//!
//! Outbound traits for the read-only contract connection.

pub mod outbound;

pub use outbound::*;
