//! # Submission Journal
//!
//! Correlates submitted URLs with their eventual on-chain fulfillment.
//!
//! The contract's `sendRequest()` takes no parameters, so the URL a user
//! submits cannot travel with the transaction; an out-of-band fulfillment
//! component later needs to know which URL a given transaction was for.
//! The journal is an explicit, caller-owned context object keyed by
//! transaction hash, replacing a single overwritable session slot.
//!
//! Entries are written after the transaction is issued but before the
//! inclusion wait, so a failed inclusion still leaves its entry behind.
//! Entries are never cleared; the last write also feeds `last_submitted()`.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Journal of submitted URLs keyed by transaction hash.
#[derive(Debug, Default)]
pub struct SubmissionJournal {
    urls_by_tx: RwLock<HashMap<String, String>>,
    last_submitted: RwLock<Option<String>>,
}

impl SubmissionJournal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted URL against its transaction hash.
    ///
    /// Last-writer-wins on both the per-transaction entry and the
    /// most-recent slot.
    pub fn record(&self, tx_hash: &str, url: &str) {
        self.urls_by_tx
            .write()
            .insert(tx_hash.to_string(), url.to_string());
        *self.last_submitted.write() = Some(url.to_string());
    }

    /// URL recorded for a transaction, if any.
    #[must_use]
    pub fn url_for(&self, tx_hash: &str) -> Option<String> {
        self.urls_by_tx.read().get(tx_hash).cloned()
    }

    /// The most recently submitted URL ("lastSubmittedUrl").
    #[must_use]
    pub fn last_submitted(&self) -> Option<String> {
        self.last_submitted.read().clone()
    }

    /// Number of recorded submissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls_by_tx.read().len()
    }

    /// True when nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls_by_tx.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let journal = SubmissionJournal::new();
        journal.record("0xaaa", "http://example.com/a");
        assert_eq!(
            journal.url_for("0xaaa").as_deref(),
            Some("http://example.com/a")
        );
        assert_eq!(journal.url_for("0xbbb"), None);
    }

    #[test]
    fn test_last_submitted_tracks_most_recent() {
        let journal = SubmissionJournal::new();
        assert_eq!(journal.last_submitted(), None);
        journal.record("0xaaa", "http://example.com/a");
        journal.record("0xbbb", "http://example.com/b");
        assert_eq!(
            journal.last_submitted().as_deref(),
            Some("http://example.com/b")
        );
        // Earlier entries survive by key.
        assert_eq!(
            journal.url_for("0xaaa").as_deref(),
            Some("http://example.com/a")
        );
    }

    #[test]
    fn test_same_tx_hash_overwrites() {
        let journal = SubmissionJournal::new();
        journal.record("0xaaa", "http://example.com/a");
        journal.record("0xaaa", "http://example.com/b");
        assert_eq!(
            journal.url_for("0xaaa").as_deref(),
            Some("http://example.com/b")
        );
        assert_eq!(journal.len(), 1);
    }
}
