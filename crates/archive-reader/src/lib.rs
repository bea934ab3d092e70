//! # Archive Reader
//!
//! Read-only backend for the NewsArchive contract.
//!
//! Resolves a network endpoint and contract address once at startup, binds
//! a non-signing connection, and serves `getAllArticles()` from it. A
//! failed initialization leaves the reader permanently degraded: every
//! call returns an empty list with a logged error, and initialization is
//! never retried. Per-call failures degrade the same way. Nothing raises
//! past this crate's boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod errors;
pub mod ports;
pub mod service;

// Re-exports
pub use config::ReaderConfig;
pub use errors::ReaderError;
pub use ports::{MockReadConnector, ReadConnector, ReadContract};
pub use service::ArticleReader;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
