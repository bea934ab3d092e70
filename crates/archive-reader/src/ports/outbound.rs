//! # Outbound Ports
//!
//! Traits for the non-signing contract connection.

use crate::errors::ReaderError;
use archive_types::{Address, Article};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// A contract handle bound to a read-only network connection.
#[async_trait]
pub trait ReadContract: Send + Sync {
    /// `getAllArticles()` accessor - returns the full collection in
    /// contract-defined order.
    async fn get_all_articles(&self) -> Result<Vec<Article>, ReaderError>;
}

/// Read-only connection factory - outbound port.
///
/// Construction validates the endpoint and address shape; it does not
/// prove the node is reachable, so per-call failures stay possible.
pub trait ReadConnector: Send + Sync {
    /// Bind a read-only handle to `contract` through `provider_url`.
    fn connect(
        &self,
        provider_url: &str,
        contract: Address,
    ) -> Result<Box<dyn ReadContract>, ReaderError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock read connector for testing.
#[derive(Clone, Default)]
pub struct MockReadConnector {
    /// Articles the connected contract will serve.
    pub articles: Arc<RwLock<Vec<Article>>>,
    /// Refuse to construct the connection?
    pub fail_connect: bool,
    /// Fail every per-call read?
    pub fail_calls: bool,
}

impl MockReadConnector {
    /// Connector serving the given articles.
    #[must_use]
    pub fn serving(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(RwLock::new(articles)),
            ..Self::default()
        }
    }

    /// Connector whose construction fails (bad endpoint).
    #[must_use]
    pub fn broken() -> Self {
        Self {
            fail_connect: true,
            ..Self::default()
        }
    }

    /// Connector that connects but fails every read.
    #[must_use]
    pub fn flaky() -> Self {
        Self {
            fail_calls: true,
            ..Self::default()
        }
    }

    /// Append an article to the served collection.
    pub fn push(&self, article: Article) {
        self.articles.write().push(article);
    }
}

impl ReadConnector for MockReadConnector {
    fn connect(
        &self,
        provider_url: &str,
        _contract: Address,
    ) -> Result<Box<dyn ReadContract>, ReaderError> {
        if self.fail_connect {
            return Err(ReaderError::BadEndpoint {
                url: provider_url.to_string(),
                reason: "mock connector configured to fail".to_string(),
            });
        }
        Ok(Box::new(MockReadContract {
            articles: Arc::clone(&self.articles),
            fail_calls: self.fail_calls,
        }))
    }
}

struct MockReadContract {
    articles: Arc<RwLock<Vec<Article>>>,
    fail_calls: bool,
}

#[async_trait]
impl ReadContract for MockReadContract {
    async fn get_all_articles(&self) -> Result<Vec<Article>, ReaderError> {
        if self.fail_calls {
            return Err(ReaderError::Network("connection reset".to_string()));
        }
        Ok(self.articles.read().clone())
    }
}
