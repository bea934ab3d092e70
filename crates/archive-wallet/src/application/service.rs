//! # Wallet Client Service
//!
//! Application service orchestrating session, ownership, and submission.
//!
//! Each operation is a sequential request/await chain with no retries: a
//! wallet prompt, a node round trip, or an inclusion wait is attempted
//! exactly once and any failure is terminal for that invocation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::config::WalletClientConfig;
use crate::domain::{
    same_address, Account, SubmissionJournal, SubmissionOutcome, WalletClientError,
};
use crate::ports::inbound::WalletClientApi;
use crate::ports::outbound::{SigningConnector, SigningContract, WalletAgent};

/// Wallet client service - drives the UI-facing workflows.
pub struct WalletClientService<A: WalletAgent, C: SigningConnector> {
    /// Configuration.
    config: WalletClientConfig,
    /// Wallet agent, when the host environment has one.
    agent: Option<Arc<A>>,
    /// Signing connection factory.
    connector: Arc<C>,
    /// Caller-owned URL correlation journal.
    journal: Arc<SubmissionJournal>,
}

impl<A: WalletAgent, C: SigningConnector> WalletClientService<A, C> {
    /// Create a new wallet client service.
    ///
    /// `agent` is `None` when no wallet software is present in the host
    /// environment; every session-dependent operation then degrades.
    pub fn new(
        config: WalletClientConfig,
        agent: Option<Arc<A>>,
        connector: Arc<C>,
        journal: Arc<SubmissionJournal>,
    ) -> Self {
        Self {
            config,
            agent,
            connector,
            journal,
        }
    }

    /// The journal this service records submissions into.
    pub fn journal(&self) -> &Arc<SubmissionJournal> {
        &self.journal
    }

    /// Internal: resolve the active account from the wallet agent.
    ///
    /// Re-fetched on every dependent operation; accounts are never cached.
    async fn connected_account(&self) -> Result<Account, WalletClientError> {
        let agent = self
            .agent
            .as_ref()
            .ok_or(WalletClientError::WalletUnavailable)?;
        let accounts = agent.request_accounts().await?;
        accounts
            .into_iter()
            .next()
            .map(Account::from)
            .ok_or(WalletClientError::NoAccounts)
    }

    /// Internal: resolve the account and require it to be the owner.
    async fn verify_owner(&self) -> Result<Account, WalletClientError> {
        let account = self.connected_account().await?;
        let contract = self
            .connector
            .connect(&account, self.config.contract_address)
            .await?;
        let owner = contract.owner().await?;
        if same_address(account.as_str(), &owner) {
            Ok(account)
        } else {
            Err(WalletClientError::NotOwner)
        }
    }

    /// Internal: open a fresh signing handle for this operation.
    async fn open_contract(
        &self,
        account: &Account,
    ) -> Result<Box<dyn SigningContract>, WalletClientError> {
        info!("Using contract address: {}", self.config.contract_address);
        self.connector
            .connect(account, self.config.contract_address)
            .await
    }

    async fn run_owner_submission(
        &self,
        account: &Account,
    ) -> Result<SubmissionOutcome, WalletClientError> {
        let contract = self.open_contract(account).await?;
        let tx_hash = contract.send_request().await?;
        let receipt = contract.wait_for_inclusion(&tx_hash).await?;
        let request_id = receipt.request_id()?.to_string();
        debug!("sendRequest included: {tx_hash}, request id {request_id}");
        Ok(SubmissionOutcome::sent(
            format!("Request sent successfully! Request ID: {request_id}"),
            tx_hash,
            Some(request_id),
        ))
    }

    async fn run_url_submission(
        &self,
        account: &Account,
        url: &str,
    ) -> Result<SubmissionOutcome, WalletClientError> {
        let contract = self.open_contract(account).await?;
        let tx_hash = contract.send_request().await?;
        // Journal before the inclusion wait: the out-of-band fulfillment
        // step must find the URL even when inclusion later fails. A failed
        // wait therefore leaves the entry behind.
        self.journal.record(&tx_hash, url);
        contract.wait_for_inclusion(&tx_hash).await?;
        debug!("sendRequest included: {tx_hash}, url journaled");
        Ok(SubmissionOutcome::sent(
            "Request sent successfully! The article will be processed.".to_string(),
            tx_hash,
            None,
        ))
    }
}

#[async_trait]
impl<A: WalletAgent, C: SigningConnector> WalletClientApi for WalletClientService<A, C> {
    async fn connect(&self) -> Option<Account> {
        match self.connected_account().await {
            Ok(account) => {
                debug!("Connected account {}", account.as_str());
                Some(account)
            }
            Err(e @ WalletClientError::WalletUnavailable) => {
                error!("{e}");
                None
            }
            Err(WalletClientError::NoAccounts) => {
                info!("No authorized accounts found");
                None
            }
            Err(e) => {
                error!("Error connecting to wallet agent: {e}");
                None
            }
        }
    }

    async fn is_owner(&self) -> bool {
        match self.verify_owner().await {
            Ok(_) => true,
            Err(WalletClientError::NotOwner) => false,
            Err(e) => {
                error!("Error checking owner status: {e}");
                false
            }
        }
    }

    async fn submit_as_owner(&self) -> SubmissionOutcome {
        let account = match self.verify_owner().await {
            Ok(account) => account,
            Err(e) => {
                error!("Rejected sendRequest: {e}");
                return SubmissionOutcome::failed(
                    WalletClientError::NotOwner.to_string(),
                    &e,
                );
            }
        };
        match self.run_owner_submission(&account).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error calling sendRequest: {e}");
                SubmissionOutcome::failed(e.to_string(), &e)
            }
        }
    }

    async fn submit_url(&self, url: &str) -> SubmissionOutcome {
        let account = match self.connected_account().await {
            Ok(account) => account,
            Err(e) => {
                error!("Error sending URL to contract: {e}");
                return SubmissionOutcome::failed("Please connect your wallet first", &e);
            }
        };
        match self.run_url_submission(&account, url).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error sending URL to contract: {e}");
                SubmissionOutcome::failed(e.to_string(), &e)
            }
        }
    }
}
