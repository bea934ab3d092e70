//! # Wallet Client Configuration
//!
//! Resolves the NewsArchive deployment address for the signing paths.

use archive_types::{Address, FALLBACK_CONTRACT_ADDRESS};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable naming the deployed contract address.
pub const CONTRACT_ADDRESS_ENV: &str = "CONTRACT_ADDRESS";

/// Wallet client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletClientConfig {
    /// Address of the deployed NewsArchive contract.
    pub contract_address: Address,
}

impl Default for WalletClientConfig {
    fn default() -> Self {
        Self {
            contract_address: FALLBACK_CONTRACT_ADDRESS,
        }
    }
}

impl WalletClientConfig {
    /// Resolve the contract address from the environment.
    ///
    /// Falls back to the placeholder deployment when `CONTRACT_ADDRESS` is
    /// unset or unparseable, logging a warning each way.
    pub fn from_env() -> Self {
        match std::env::var(CONTRACT_ADDRESS_ENV) {
            Ok(raw) => match Address::parse(&raw) {
                Ok(contract_address) => Self { contract_address },
                Err(e) => {
                    warn!("Ignoring unparseable {CONTRACT_ADDRESS_ENV} ({e}); using fallback");
                    Self::default()
                }
            },
            Err(_) => {
                warn!(
                    "Missing {CONTRACT_ADDRESS_ENV} environment variable; \
                     using placeholder contract address"
                );
                Self::default()
            }
        }
    }

    /// Config pointed at an explicit deployment (used by tests).
    pub fn for_contract(contract_address: Address) -> Self {
        Self { contract_address }
    }
}
