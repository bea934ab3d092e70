//! # Domain Errors
//!
//! Error types for the wallet client.
//!
//! Session and ownership paths log these and degrade to `None`/`false`;
//! submission paths fold them into a [`super::SubmissionOutcome`]. They
//! never cross the inbound API as raw errors.

use archive_types::{AddressParseError, ReceiptError};
use thiserror::Error;

/// Wallet client error types.
#[derive(Debug, Error)]
pub enum WalletClientError {
    /// No wallet agent is present in the host environment.
    #[error("No wallet agent detected; please install MetaMask or an equivalent")]
    WalletUnavailable,

    /// The agent responded with zero authorized accounts.
    #[error("No authorized accounts found")]
    NoAccounts,

    /// Agent-level fault: user rejection or agent failure.
    #[error("Wallet agent error: {0}")]
    AgentError(String),

    /// The connected account is not the contract owner.
    #[error("Only the contract owner can call this function")]
    NotOwner,

    /// An address string failed to parse.
    #[error("Invalid address: {0}")]
    BadAddress(#[from] AddressParseError),

    /// Network-level failure talking to the node.
    #[error("Network error: {0}")]
    Network(String),

    /// The contract call itself failed (revert, missing method).
    #[error("Contract call failed: {0}")]
    ContractCall(String),

    /// The inclusion receipt did not match the expected event layout.
    #[error(transparent)]
    MalformedReceipt(#[from] ReceiptError),
}
