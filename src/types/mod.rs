//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `account`: the ledger Account
//! - `student`: Student and Grade
//! - `policy`: validation, interest and mark-bound policies
//! - `error`: error type for the ledger

pub mod account;
pub mod error;
pub mod policy;
pub mod student;

pub use account::Account;
pub use error::LedgerError;
pub use policy::{AccountConfig, GradingConfig, InterestPolicy, MarkBounds, ValidationPolicy};
pub use student::{Grade, Student};
