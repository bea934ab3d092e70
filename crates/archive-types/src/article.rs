//! # Article
//!
//! The contract-defined article record, carried opaquely.
//!
//! The NewsArchive contract owns the article schema; this layer returns
//! whatever `getAllArticles()` yields, verbatim and in contract order,
//! without interpreting individual fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque article record as returned by the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article(pub Value);

impl Article {
    /// Wraps a raw contract-returned value.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// The raw contract-returned value.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Article {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}
