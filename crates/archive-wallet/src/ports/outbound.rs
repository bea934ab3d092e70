//! # Outbound Ports
//!
//! Traits for external dependencies: the wallet agent and the contract
//! reached through a signing connection.

use crate::domain::{Account, WalletClientError};
use archive_types::{Address, LogEntry, TxReceipt};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// Wallet agent - outbound port.
///
/// Browser-resident key manager (MetaMask or equivalent) satisfying the
/// `eth_requestAccounts` request/response protocol.
#[async_trait]
pub trait WalletAgent: Send + Sync {
    /// Request account authorization from the agent.
    ///
    /// Returns the authorized accounts in agent-defined order; the first
    /// is taken as active. User rejection surfaces as an error.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletClientError>;

    /// Agent identifier (for logging/debugging).
    fn agent_id(&self) -> &str;
}

/// A contract handle bound to a signing connection - outbound port.
///
/// Typed view of the NewsArchive method surface. Handles are constructed
/// fresh per operation and discarded after use; nothing is cached.
#[async_trait]
pub trait SigningContract: Send + Sync {
    /// `owner()` accessor - read call, no state change, no gas.
    async fn owner(&self) -> Result<String, WalletClientError>;

    /// `sendRequest()` - zero-argument state-changing call.
    ///
    /// Returns the transaction hash once the node accepts the submission.
    async fn send_request(&self) -> Result<String, WalletClientError>;

    /// Await inclusion of a submitted transaction and return its receipt.
    async fn wait_for_inclusion(&self, tx_hash: &str) -> Result<TxReceipt, WalletClientError>;
}

/// Signing connection factory - outbound port.
///
/// Opens the wallet-agent-backed provider/signer chain and binds a
/// contract handle to it.
#[async_trait]
pub trait SigningConnector: Send + Sync {
    /// Open a signing connection for `account` bound to `contract`.
    async fn connect(
        &self,
        account: &Account,
        contract: Address,
    ) -> Result<Box<dyn SigningContract>, WalletClientError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock wallet agent for testing.
#[derive(Clone)]
pub struct MockWalletAgent {
    /// Agent identifier.
    pub id: String,
    /// Accounts the agent will authorize, in order.
    pub accounts: Vec<String>,
    /// Simulate an agent fault (user rejection)?
    pub should_fail: bool,
}

impl Default for MockWalletAgent {
    fn default() -> Self {
        Self {
            id: "mock-agent".to_string(),
            accounts: vec!["0xAbCd000000000000000000000000000000000001".to_string()],
            should_fail: false,
        }
    }
}

impl MockWalletAgent {
    /// Agent authorizing the given accounts.
    #[must_use]
    pub fn with_accounts(accounts: Vec<String>) -> Self {
        Self {
            accounts,
            ..Self::default()
        }
    }

    /// Agent that rejects every authorization request.
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl WalletAgent for MockWalletAgent {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletClientError> {
        if self.should_fail {
            return Err(WalletClientError::AgentError(
                "user rejected the request".to_string(),
            ));
        }
        Ok(self.accounts.clone())
    }

    fn agent_id(&self) -> &str {
        &self.id
    }
}

/// Failure points a [`MockSigningConnector`] can be told to trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockFailure {
    /// Fail while opening the connection.
    OnConnect,
    /// Fail the `owner()` read.
    OnOwner,
    /// Fail the `sendRequest()` submission.
    OnSend,
    /// Fail the inclusion wait.
    OnWait,
}

/// Mock signing connector/contract for testing.
///
/// Hands out handles over shared state so tests can script the owner
/// address, the receipt shape, and a failure point.
#[derive(Clone)]
pub struct MockSigningConnector {
    inner: Arc<MockContractState>,
}

struct MockContractState {
    owner: String,
    receipt_topics: RwLock<Vec<String>>,
    failure: Option<MockFailure>,
    sent: RwLock<u64>,
    connects: RwLock<u64>,
}

impl MockSigningConnector {
    /// Connector whose contract reports the given owner.
    #[must_use]
    pub fn with_owner(owner: &str) -> Self {
        Self {
            inner: Arc::new(MockContractState {
                owner: owner.to_string(),
                receipt_topics: RwLock::new(vec![
                    "0xsig".to_string(),
                    "0x0000000000000000000000000000000000000000000000000000000000000001"
                        .to_string(),
                ]),
                failure: None,
                sent: RwLock::new(0),
                connects: RwLock::new(0),
            }),
        }
    }

    /// Override the topics on the receipt's first log. An empty vector
    /// yields a receipt with no logs at all.
    #[must_use]
    pub fn with_receipt_topics(self, topics: Vec<String>) -> Self {
        *self.inner.receipt_topics.write() = topics;
        self
    }

    /// Trip the given failure point.
    #[must_use]
    pub fn failing_at(mut self, failure: MockFailure) -> Self {
        let state = Arc::get_mut(&mut self.inner).expect("unshared at setup time");
        state.failure = Some(failure);
        self
    }

    /// Number of `sendRequest()` submissions issued through this connector.
    #[must_use]
    pub fn sent_count(&self) -> u64 {
        *self.inner.sent.read()
    }

    /// Number of signing connections opened through this connector.
    #[must_use]
    pub fn connect_count(&self) -> u64 {
        *self.inner.connects.read()
    }
}

#[async_trait]
impl SigningConnector for MockSigningConnector {
    async fn connect(
        &self,
        _account: &Account,
        _contract: Address,
    ) -> Result<Box<dyn SigningContract>, WalletClientError> {
        *self.inner.connects.write() += 1;
        if self.inner.failure == Some(MockFailure::OnConnect) {
            return Err(WalletClientError::Network("connection refused".to_string()));
        }
        Ok(Box::new(MockContractHandle {
            state: Arc::clone(&self.inner),
        }))
    }
}

struct MockContractHandle {
    state: Arc<MockContractState>,
}

#[async_trait]
impl SigningContract for MockContractHandle {
    async fn owner(&self) -> Result<String, WalletClientError> {
        if self.state.failure == Some(MockFailure::OnOwner) {
            return Err(WalletClientError::ContractCall(
                "execution reverted".to_string(),
            ));
        }
        Ok(self.state.owner.clone())
    }

    async fn send_request(&self) -> Result<String, WalletClientError> {
        if self.state.failure == Some(MockFailure::OnSend) {
            return Err(WalletClientError::ContractCall(
                "execution reverted".to_string(),
            ));
        }
        let mut sent = self.state.sent.write();
        *sent += 1;
        Ok(format!("0xmocktx{:04x}", *sent))
    }

    async fn wait_for_inclusion(&self, tx_hash: &str) -> Result<TxReceipt, WalletClientError> {
        if self.state.failure == Some(MockFailure::OnWait) {
            return Err(WalletClientError::Network(
                "transaction dropped from mempool".to_string(),
            ));
        }
        let topics = self.state.receipt_topics.read().clone();
        let logs = if topics.is_empty() {
            vec![]
        } else {
            vec![LogEntry {
                address: "0x16f52e327e57ceb124db335306c3e15d4ef5650b".to_string(),
                topics,
                data: "0x".to_string(),
            }]
        };
        Ok(TxReceipt {
            tx_hash: tx_hash.to_string(),
            logs,
        })
    }
}
