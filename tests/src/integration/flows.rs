//! # Integration Test Flows
//!
//! Exercises the wallet client and the read-only reader together against
//! one simulated NewsArchive deployment:
//!
//! 1. **Owner path**: ownership check gates `sendRequest`, and the request
//!    id decoded from the receipt matches what the contract emitted.
//! 2. **URL path**: any connected account submits, the journal correlates
//!    the URL by transaction hash, and a simulated out-of-band fulfillment
//!    makes the article visible to the reader.
//! 3. **Degraded paths**: a missing wallet or a bad read connection never
//!    raises, only degrades.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use archive_reader::{ArticleReader, MockReadConnector, ReadConnector, ReadContract, ReaderConfig, ReaderError};
    use archive_types::{Address, Article};
    use archive_wallet::{
        request_sent_signature, InMemoryConnector, InMemoryNewsArchive, MockWalletAgent,
        SubmissionJournal, WalletClientApi, WalletClientConfig, WalletClientService,
    };

    const OWNER: &str = "0x16F52E327e57cEB124Db335306c3E15D4EF5650b";
    const READER_ACCOUNT: &str = "0x1234567890123456789012345678901234567890";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn deployment() -> Address {
        Address::new([0x42; 20])
    }

    /// Wallet service wired to a simulated deployment for `account`.
    fn wallet_service(
        archive: &Arc<InMemoryNewsArchive>,
        account: Option<&str>,
    ) -> WalletClientService<MockWalletAgent, InMemoryConnector> {
        let agent = account
            .map(|a| Arc::new(MockWalletAgent::with_accounts(vec![a.to_string()])));
        WalletClientService::new(
            WalletClientConfig::for_contract(archive.deployment()),
            agent,
            Arc::new(InMemoryConnector::new(Arc::clone(archive))),
            Arc::new(SubmissionJournal::new()),
        )
    }

    /// Read-only connector over the same simulated deployment.
    struct ArchiveReadConnector {
        archive: Arc<InMemoryNewsArchive>,
    }

    impl ReadConnector for ArchiveReadConnector {
        fn connect(
            &self,
            _provider_url: &str,
            contract: Address,
        ) -> Result<Box<dyn ReadContract>, ReaderError> {
            if contract != self.archive.deployment() {
                return Err(ReaderError::ContractCall(format!(
                    "no contract deployed at {contract}"
                )));
            }
            Ok(Box::new(ArchiveReadContract {
                archive: Arc::clone(&self.archive),
            }))
        }
    }

    struct ArchiveReadContract {
        archive: Arc<InMemoryNewsArchive>,
    }

    #[async_trait]
    impl ReadContract for ArchiveReadContract {
        async fn get_all_articles(&self) -> Result<Vec<Article>, ReaderError> {
            Ok(self.archive.articles())
        }
    }

    fn reader_for(archive: &Arc<InMemoryNewsArchive>) -> ArticleReader {
        let config = ReaderConfig {
            provider_url: "http://localhost:8545".to_string(),
            contract_address: archive.deployment(),
        };
        let connector = ArchiveReadConnector {
            archive: Arc::clone(archive),
        };
        ArticleReader::new(&config, &connector)
    }

    // =============================================================================
    // INTEGRATION TESTS: OWNER SUBMISSION
    // =============================================================================

    #[tokio::test]
    async fn test_owner_submits_and_decodes_request_id() {
        let archive = InMemoryNewsArchive::deploy(deployment(), OWNER);
        let svc = wallet_service(&archive, Some(OWNER));

        assert!(svc.is_owner().await);

        let outcome = svc.submit_as_owner().await;
        assert!(outcome.success, "owner submission should succeed");
        assert_eq!(
            outcome.request_id.as_deref(),
            Some(format!("0x{:064x}", 1).as_str())
        );
        assert!(outcome.message.starts_with("Request sent successfully!"));
    }

    #[tokio::test]
    async fn test_non_owner_is_gated_but_may_submit_urls() {
        let archive = InMemoryNewsArchive::deploy(deployment(), OWNER);
        let svc = wallet_service(&archive, Some(READER_ACCOUNT));

        assert!(!svc.is_owner().await);

        let gated = svc.submit_as_owner().await;
        assert!(!gated.success);
        assert_eq!(gated.message, "Only the contract owner can call this function");

        let allowed = svc.submit_url("http://example.com/story").await;
        assert!(allowed.success);
    }

    #[tokio::test]
    async fn test_receipt_layout_matches_contract_event() {
        let archive = InMemoryNewsArchive::deploy(deployment(), OWNER);
        let svc = wallet_service(&archive, Some(OWNER));

        let first = svc.submit_as_owner().await;
        let second = svc.submit_as_owner().await;

        // Two independent transactions, two distinct identifiers.
        assert_ne!(first.tx_hash, second.tx_hash);
        assert_ne!(first.request_id, second.request_id);

        // Topic 0 of the emitted log is the RequestSent signature hash.
        assert!(request_sent_signature().starts_with("0x"));
    }

    // =============================================================================
    // INTEGRATION TESTS: URL SUBMISSION → FULFILLMENT → READER
    // =============================================================================

    #[tokio::test]
    async fn test_url_flows_through_journal_to_fulfilled_article() {
        let archive = InMemoryNewsArchive::deploy(deployment(), OWNER);
        let svc = wallet_service(&archive, Some(READER_ACCOUNT));
        let reader = reader_for(&archive);

        // Page load before any submission: empty archive, no error.
        assert!(reader.get_all_articles().await.is_empty());

        let outcome = svc.submit_url("http://example.com/story").await;
        assert!(outcome.success);
        let tx_hash = outcome.tx_hash.unwrap();

        // The fulfillment component finds the URL by transaction hash.
        let url = svc.journal().url_for(&tx_hash).unwrap();
        assert_eq!(url, "http://example.com/story");

        // Simulated out-of-band fulfillment archives the article.
        archive.fulfill(Article::new(json!({ "url": url, "title": "Story" })));

        let articles = reader.get_all_articles().await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].raw()["url"], "http://example.com/story");
    }

    #[tokio::test]
    async fn test_articles_come_back_in_fulfillment_order() {
        let archive = InMemoryNewsArchive::deploy(deployment(), OWNER);
        let svc = wallet_service(&archive, Some(READER_ACCOUNT));
        let reader = reader_for(&archive);

        for url in ["http://example.com/a", "http://example.com/b"] {
            let outcome = svc.submit_url(url).await;
            assert!(outcome.success);
            archive.fulfill(Article::new(json!({ "url": url })));
        }

        let articles = reader.get_all_articles().await;
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].raw()["url"], "http://example.com/a");
        assert_eq!(articles[1].raw()["url"], "http://example.com/b");
    }

    // =============================================================================
    // INTEGRATION TESTS: DEGRADED PATHS
    // =============================================================================

    #[tokio::test]
    async fn test_missing_wallet_degrades_every_operation() {
        let archive = InMemoryNewsArchive::deploy(deployment(), OWNER);
        let svc = wallet_service(&archive, None);

        assert_eq!(svc.connect().await, None);
        assert!(!svc.is_owner().await);

        let outcome = svc.submit_url("http://example.com/story").await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Please connect your wallet first");
        assert!(svc.journal().is_empty());
    }

    #[tokio::test]
    async fn test_reader_pointed_at_wrong_deployment_degrades() {
        let archive = InMemoryNewsArchive::deploy(deployment(), OWNER);
        archive.fulfill(Article::new(json!({"url": "invisible"})));

        let config = ReaderConfig {
            provider_url: "http://localhost:8545".to_string(),
            contract_address: Address::ZERO,
        };
        let connector = ArchiveReadConnector {
            archive: Arc::clone(&archive),
        };
        let reader = ArticleReader::new(&config, &connector);

        assert!(!reader.is_initialized());
        assert!(reader.get_all_articles().await.is_empty());
    }

    #[tokio::test]
    async fn test_reader_with_broken_endpoint_stays_degraded() {
        let config = ReaderConfig::default();
        let reader = ArticleReader::new(&config, &MockReadConnector::broken());

        for _ in 0..3 {
            assert!(reader.get_all_articles().await.is_empty());
        }
    }
}
