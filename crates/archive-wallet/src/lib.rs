//! # Archive Wallet Client
//!
//! Wallet-facing integration layer for the NewsArchive contract.
//!
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! Drive the three wallet-side workflows against the deployed contract:
//! - Session: detect the wallet agent and obtain the active account
//! - Ownership: compare the connected account against the contract owner
//! - Submission: fire `sendRequest()` transactions and report the outcome
//!
//! Failures split into two classes. Session and ownership failures degrade
//! silently (a logged diagnostic, then `None`/`false`); submission failures
//! surface as a [`SubmissionOutcome`] with `success == false` so a UI can
//! display them. Nothing in this crate panics or propagates past the API.
//!
//! ## Module Structure
//!
//! ```text
//! archive-wallet/
//! ├── domain/          # Account, SubmissionOutcome, SubmissionJournal, errors
//! ├── ports/           # WalletClientApi (inbound) + agent/contract traits (outbound)
//! ├── adapters/        # In-memory simulated NewsArchive contract
//! ├── application/     # WalletClientService orchestrating everything
//! └── config.rs        # WalletClientConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{request_sent_signature, InMemoryConnector, InMemoryNewsArchive};
pub use application::WalletClientService;
pub use config::WalletClientConfig;
pub use domain::{
    same_address, Account, SubmissionJournal, SubmissionOutcome, WalletClientError,
};
pub use ports::{
    MockSigningConnector, MockWalletAgent, SigningConnector, SigningContract, WalletAgent,
    WalletClientApi,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
