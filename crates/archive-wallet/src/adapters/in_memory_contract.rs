//! # In-Memory NewsArchive Adapter
//!
//! Implements the `SigningConnector`/`SigningContract` ports against a
//! simulated deployment.
//!
//! In production these ports are backed by a wallet-agent provider/signer
//! chain making JSON-RPC calls to a node. The in-memory deployment mirrors
//! the contract's observable behavior - owner accessor, `sendRequest()`
//! with a `RequestSent` log, article storage filled by an out-of-band
//! fulfillment step - so the full client flow is exercisable in tests.

use crate::domain::{Account, WalletClientError};
use crate::ports::outbound::{SigningConnector, SigningContract};
use archive_types::{Address, Article, LogEntry, TxReceipt};
use async_trait::async_trait;
use parking_lot::RwLock;
use sha3::{Digest, Keccak256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Keccak-256 hash of `RequestSent(bytes32)`, the event's topic 0.
#[must_use]
pub fn request_sent_signature() -> String {
    let digest = Keccak256::digest(b"RequestSent(bytes32)");
    format!("0x{}", hex::encode(digest))
}

/// Simulated NewsArchive deployment.
pub struct InMemoryNewsArchive {
    /// Address the contract is "deployed" at.
    deployment: Address,
    /// Owner address as the contract reports it (lowercase, per node
    /// convention).
    owner: String,
    /// Monotonic request counter; doubles as the request identifier seed.
    next_request: RwLock<u64>,
    /// Receipts for submitted transactions, keyed by transaction hash.
    receipts: RwLock<HashMap<String, TxReceipt>>,
    /// Articles archived by fulfilled requests, in fulfillment order.
    articles: RwLock<Vec<Article>>,
}

impl InMemoryNewsArchive {
    /// Deploy a simulated contract at `deployment`, owned by `owner`.
    #[must_use]
    pub fn deploy(deployment: Address, owner: &str) -> Arc<Self> {
        Arc::new(Self {
            deployment,
            owner: owner.to_lowercase(),
            next_request: RwLock::new(0),
            receipts: RwLock::new(HashMap::new()),
            articles: RwLock::new(Vec::new()),
        })
    }

    /// The deployment address.
    #[must_use]
    pub fn deployment(&self) -> Address {
        self.deployment
    }

    /// Simulate the out-of-band fulfillment step archiving an article.
    pub fn fulfill(&self, article: Article) {
        info!("[archive] Fulfilling request with article");
        self.articles.write().push(article);
    }

    /// Articles archived so far, in contract order.
    #[must_use]
    pub fn articles(&self) -> Vec<Article> {
        self.articles.read().clone()
    }

    fn issue_request(&self) -> (String, TxReceipt) {
        let mut counter = self.next_request.write();
        *counter += 1;
        let request_id = format!("0x{:064x}", *counter);

        let mut hasher = Keccak256::new();
        hasher.update(self.deployment.as_bytes());
        hasher.update(counter.to_be_bytes());
        let tx_hash = format!("0x{}", hex::encode(hasher.finalize()));

        let receipt = TxReceipt {
            tx_hash: tx_hash.clone(),
            logs: vec![LogEntry {
                address: self.deployment.to_hex(),
                topics: vec![request_sent_signature(), request_id],
                data: "0x".to_string(),
            }],
        };
        (tx_hash, receipt)
    }
}

/// Connector handing out signing handles to an in-memory deployment.
#[derive(Clone)]
pub struct InMemoryConnector {
    archive: Arc<InMemoryNewsArchive>,
}

impl InMemoryConnector {
    /// Connector for the given deployment.
    #[must_use]
    pub fn new(archive: Arc<InMemoryNewsArchive>) -> Self {
        Self { archive }
    }
}

#[async_trait]
impl SigningConnector for InMemoryConnector {
    async fn connect(
        &self,
        account: &Account,
        contract: Address,
    ) -> Result<Box<dyn SigningContract>, WalletClientError> {
        if contract != self.archive.deployment {
            return Err(WalletClientError::ContractCall(format!(
                "no contract deployed at {contract}"
            )));
        }
        debug!("[archive] Opening signing connection for {}", account.as_str());
        Ok(Box::new(InMemoryHandle {
            archive: Arc::clone(&self.archive),
        }))
    }
}

struct InMemoryHandle {
    archive: Arc<InMemoryNewsArchive>,
}

#[async_trait]
impl SigningContract for InMemoryHandle {
    async fn owner(&self) -> Result<String, WalletClientError> {
        Ok(self.archive.owner.clone())
    }

    async fn send_request(&self) -> Result<String, WalletClientError> {
        let (tx_hash, receipt) = self.archive.issue_request();
        self.archive
            .receipts
            .write()
            .insert(tx_hash.clone(), receipt);
        debug!("[archive] Submitted sendRequest as {tx_hash}");
        Ok(tx_hash)
    }

    async fn wait_for_inclusion(&self, tx_hash: &str) -> Result<TxReceipt, WalletClientError> {
        self.archive
            .receipts
            .read()
            .get(tx_hash)
            .cloned()
            .ok_or_else(|| {
                WalletClientError::Network(format!("unknown transaction {tx_hash}"))
            })
    }
}
