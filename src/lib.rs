//! Bank Ledger Library
//! # Overview
//!
//! This library provides a validated account ledger (deposit, withdraw,
//! transfer, interest) together with a student grade calculator and roster.
//!
//! # Architecture
//!
//! The crate is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Student, policies, errors)
//! - [`core`] - Business logic components:
//!   - [`core::account_ops`] - Balance operations on an Account
//!   - [`core::transfer`] - Moving funds between two accounts
//!   - [`core::grading`] - Mark validation, averages and grades
//!   - [`core::roster`] - Student collections and class statistics
//! - [`io`] - CSV report output
//! - [`telemetry`] - Tracing setup
//! - [`walkthrough`] - Scripted end-to-end run used by the binary
//!
//! # Account Operations
//!
//! - **Deposit**: Credit a positive amount
//! - **Withdraw**: Debit a positive amount no larger than the balance
//! - **Transfer**: Withdraw from one account and deposit into another,
//!   all or nothing
//! - **Interest**: Credit `balance * rate / 100` on savings accounts
//!
//! # Validation Policies
//!
//! Accounts and students carry a [`types::ValidationPolicy`]. `Strict`
//! (the default) rejects invalid input with a [`types::LedgerError`];
//! `Lenient` logs a warning and leaves the state unchanged. Transfers are
//! always strict.
//!
//! # Example
//!
//! ```
//! use bank_ledger::core::transfer;
//! use bank_ledger::types::Account;
//! use rust_decimal::Decimal;
//!
//! let mut from = Account::open("From", Decimal::new(200, 0)).unwrap();
//! let mut to = Account::open("To", Decimal::new(50, 0)).unwrap();
//!
//! transfer(&mut from, &mut to, Decimal::new(100, 0)).unwrap();
//!
//! assert_eq!(from.balance(), Decimal::new(100, 0));
//! assert_eq!(to.balance(), Decimal::new(150, 0));
//! ```

pub mod core;
pub mod io;
pub mod telemetry;
pub mod types;
pub mod walkthrough;
