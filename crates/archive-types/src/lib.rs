//! # Archive Types
//!
//! Shared primitives for the NewsArchive client crates.
//!
//! ## Purpose
//!
//! Both the wallet-facing client (`archive-wallet`) and the read-only query
//! backend (`archive-reader`) address the same deployed contract. This crate
//! holds the types they exchange with it:
//! - `Address` — 20-byte contract/account address with case-insensitive parsing
//! - `TxReceipt` / `LogEntry` — inclusion receipts with verbatim topic strings
//! - `Article` — the contract's article record, carried opaquely
//!
//! ## Module Structure
//!
//! ```text
//! archive-types/
//! ├── address.rs       # Address newtype, hex parsing
//! ├── receipt.rs       # LogEntry, TxReceipt, request-id decoding
//! └── article.rs       # Opaque Article payload
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod article;
pub mod receipt;

// Re-exports
pub use address::{Address, AddressParseError, FALLBACK_CONTRACT_ADDRESS};
pub use article::Article;
pub use receipt::{LogEntry, ReceiptError, TxReceipt};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
