//! # Reader Configuration
//!
//! Resolves the JSON-RPC endpoint and contract address for the read path.

use archive_types::{Address, FALLBACK_CONTRACT_ADDRESS};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable naming the JSON-RPC endpoint.
pub const PROVIDER_URL_ENV: &str = "PROVIDER_URL";

/// Environment variable naming the deployed contract address.
pub const CONTRACT_ADDRESS_ENV: &str = "CONTRACT_ADDRESS";

/// Placeholder endpoint used when no provider is configured.
pub const FALLBACK_PROVIDER_URL: &str = "https://sepolia.infura.io/v3/your_api_key_here";

/// Reader configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// JSON-RPC endpoint for the non-signing connection.
    pub provider_url: String,
    /// Address of the deployed NewsArchive contract.
    pub contract_address: Address,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            provider_url: FALLBACK_PROVIDER_URL.to_string(),
            contract_address: FALLBACK_CONTRACT_ADDRESS,
        }
    }
}

impl ReaderConfig {
    /// Resolve endpoint and contract address from the environment.
    ///
    /// Call this once at startup: when either variable is unset the
    /// placeholder takes over and a single warning says so.
    pub fn from_env() -> Self {
        let provider_url = std::env::var(PROVIDER_URL_ENV).ok();
        let contract_address = std::env::var(CONTRACT_ADDRESS_ENV)
            .ok()
            .and_then(|raw| match Address::parse(&raw) {
                Ok(addr) => Some(addr),
                Err(e) => {
                    warn!("Ignoring unparseable {CONTRACT_ADDRESS_ENV} ({e})");
                    None
                }
            });

        if provider_url.is_none() || contract_address.is_none() {
            warn!(
                "Missing environment variables. Please set {PROVIDER_URL_ENV} and \
                 {CONTRACT_ADDRESS_ENV}; falling back to placeholders"
            );
        }

        Self {
            provider_url: provider_url.unwrap_or_else(|| FALLBACK_PROVIDER_URL.to_string()),
            contract_address: contract_address.unwrap_or(FALLBACK_CONTRACT_ADDRESS),
        }
    }
}
