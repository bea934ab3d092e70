//! # Domain Module
//!
//! Core domain types for the wallet client.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod journal;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use journal::SubmissionJournal;
