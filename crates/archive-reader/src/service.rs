//! # Article Reader Service
//!
//! One-shot initialization into an optional read handle, then per-call
//! article fetches that degrade to empty results on any failure.

use tracing::{debug, error};

use crate::config::ReaderConfig;
use crate::errors::ReaderError;
use crate::ports::{ReadConnector, ReadContract};
use archive_types::Article;

/// Read-only article reader.
///
/// Initialization is attempted exactly once, at construction. A reader
/// whose connection could not be built stays degraded for its whole
/// lifetime: `get_all_articles` keeps returning `[]` and logging, and the
/// connection is never rebuilt.
pub struct ArticleReader {
    contract: Option<Box<dyn ReadContract>>,
}

impl ArticleReader {
    /// Build a reader over a read-only contract connection.
    pub fn new(config: &ReaderConfig, connector: &dyn ReadConnector) -> Self {
        let contract = match connector.connect(&config.provider_url, config.contract_address) {
            Ok(contract) => {
                debug!(
                    "Reader bound to {} via {}",
                    config.contract_address, config.provider_url
                );
                Some(contract)
            }
            Err(e) => {
                error!("Error initializing contract: {e}");
                None
            }
        };
        Self { contract }
    }

    /// Whether initialization succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.contract.is_some()
    }

    /// Fetch the full article collection, verbatim and in contract order.
    ///
    /// Returns `[]` on every failure path; errors are logged, never raised.
    pub async fn get_all_articles(&self) -> Vec<Article> {
        let Some(contract) = self.contract.as_ref() else {
            error!("Contract not initialized. Check your environment variables.");
            return Vec::new();
        };
        match contract.get_all_articles().await {
            Ok(articles) => articles,
            Err(e) => {
                error!("Error fetching articles: {e}");
                Vec::new()
            }
        }
    }

    /// Fetch articles, surfacing the error (used by callers that want to
    /// distinguish "empty archive" from "failed read").
    pub async fn try_get_all_articles(&self) -> Result<Vec<Article>, ReaderError> {
        let Some(contract) = self.contract.as_ref() else {
            return Err(ReaderError::ContractCall(
                "contract not initialized".to_string(),
            ));
        };
        contract.get_all_articles().await
    }
}
