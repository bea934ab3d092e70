//! # Adapters Module
//!
//! Outbound port implementations.

pub mod in_memory_contract;

pub use in_memory_contract::{
    request_sent_signature, InMemoryConnector, InMemoryNewsArchive,
};
