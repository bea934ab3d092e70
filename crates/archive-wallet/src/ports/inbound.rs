//! # Inbound Ports
//!
//! API trait defining what the wallet client can do for a UI.

use crate::domain::{Account, SubmissionOutcome};
use async_trait::async_trait;

/// Wallet client API - inbound port.
///
/// Every operation follows "call once, report the immediate result": no
/// retries, no timeouts, no escalation past this boundary. Session and
/// ownership failures degrade to `None`/`false`; submission failures come
/// back as a [`SubmissionOutcome`] with `success == false`.
#[async_trait]
pub trait WalletClientApi: Send + Sync {
    /// Detect the wallet agent and return the active account.
    ///
    /// Returns `None` (with a logged diagnostic) when the agent is absent,
    /// authorizes zero accounts, or faults. The account comes back exactly
    /// as the agent reported it.
    async fn connect(&self) -> Option<Account>;

    /// True iff the connected account is the contract owner.
    ///
    /// Case-insensitive address comparison; any failure along the way is
    /// logged and reported as `false`.
    async fn is_owner(&self) -> bool;

    /// Submit `sendRequest()` as the contract owner.
    ///
    /// Gated on [`Self::is_owner`]; the outcome carries the transaction
    /// hash and the request identifier decoded from the receipt.
    async fn submit_as_owner(&self) -> SubmissionOutcome;

    /// Submit `sendRequest()` correlated with a URL.
    ///
    /// Any connected account may call this. The URL is not validated and
    /// is journaled before the inclusion wait so the out-of-band
    /// fulfillment step can find it even if inclusion fails.
    async fn submit_url(&self, url: &str) -> SubmissionOutcome;
}
