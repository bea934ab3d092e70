//! # Transaction Receipts
//!
//! Record returned after a state-changing call is included in a block,
//! carrying the log entries the contract emitted.
//!
//! Topic strings are carried verbatim as returned by the node: the request
//! identifier in `logs[0].topics[1]` must round-trip without any case
//! transformation, so no byte-level parsing happens here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single log entry emitted during transaction execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Address of the contract that emitted the log.
    pub address: String,
    /// Indexed event fields. Topic 0 is conventionally the event
    /// signature hash; later topics carry indexed arguments.
    pub topics: Vec<String>,
    /// Unindexed event data, 0x-prefixed hex.
    pub data: String,
}

/// Receipt for an included state-changing transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Hash of the included transaction.
    pub tx_hash: String,
    /// Logs emitted during execution, in emission order.
    pub logs: Vec<LogEntry>,
}

/// Errors from decoding fields out of a receipt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// The receipt carries no logs at all.
    #[error("Malformed receipt: no logs emitted")]
    EmptyLogs,

    /// The first log does not carry enough topics.
    #[error("Malformed receipt: log 0 has {got} topics, need at least {need}")]
    MissingTopic {
        /// Topics present on the log.
        got: usize,
        /// Topics required by the event layout.
        need: usize,
    },
}

impl TxReceipt {
    /// Decodes the request identifier from the first log's second topic.
    ///
    /// The NewsArchive contract's `sendRequest` emits its request id as the
    /// first indexed argument of the first log. A receipt that does not
    /// match that layout is malformed and yields an explicit error instead
    /// of an index panic.
    pub fn request_id(&self) -> Result<&str, ReceiptError> {
        let first_log = self.logs.first().ok_or(ReceiptError::EmptyLogs)?;
        first_log
            .topics
            .get(1)
            .map(String::as_str)
            .ok_or(ReceiptError::MissingTopic {
                got: first_log.topics.len(),
                need: 2,
            })
    }
}
