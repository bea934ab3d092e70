//! # Domain Entities
//!
//! Request-scoped values exchanged with the UI layer.

use serde::{Deserialize, Serialize};

use super::errors::WalletClientError;

/// The active wallet account.
///
/// Carried exactly as the wallet agent reported it — no case normalization
/// happens at the session stage, only at comparison time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account(pub String);

impl Account {
    /// The account address as the agent returned it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Account {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Outcome of a submitted state-changing call, shaped for UI display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// Whether the submission was included successfully.
    pub success: bool,
    /// Human-readable message for the UI.
    pub message: String,
    /// Hash of the submitted transaction, when one was issued.
    pub tx_hash: Option<String>,
    /// Request identifier decoded from the receipt (owner path only).
    pub request_id: Option<String>,
    /// Underlying error detail on failure.
    pub error: Option<String>,
}

impl SubmissionOutcome {
    /// Successful submission.
    #[must_use]
    pub fn sent(message: String, tx_hash: String, request_id: Option<String>) -> Self {
        Self {
            success: true,
            message,
            tx_hash: Some(tx_hash),
            request_id,
            error: None,
        }
    }

    /// Failed submission, with the underlying error preserved as detail.
    #[must_use]
    pub fn failed(message: impl Into<String>, error: &WalletClientError) -> Self {
        Self {
            success: false,
            message: message.into(),
            tx_hash: None,
            request_id: None,
            error: Some(error.to_string()),
        }
    }
}
