//! Error types for the read path. Logged and degraded to empty results at
//! the service boundary, never propagated to callers.

use thiserror::Error;

/// Reader error types.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The configured endpoint could not back a connection.
    #[error("Bad endpoint {url}: {reason}")]
    BadEndpoint {
        /// Configured endpoint URL.
        url: String,
        /// Why the connection could not be built.
        reason: String,
    },

    /// Network-level failure talking to the node.
    #[error("Network error: {0}")]
    Network(String),

    /// The contract call itself failed.
    #[error("Contract call failed: {0}")]
    ContractCall(String),
}
