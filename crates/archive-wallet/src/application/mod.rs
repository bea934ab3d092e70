//! # Application Module
//!
//! Service orchestrating the wallet-side workflows.

pub mod service;

pub use service::WalletClientService;
