//! Core business logic module
//!
//! This module contains the operations behind the data types:
//! - `account_ops` - Deposits, withdrawals and interest on an Account
//! - `transfer` - Moving funds between two accounts
//! - `grading` - Mark validation, averages and grades for a Student
//! - `roster` - Collections of students and class statistics

pub mod account_ops;
pub mod grading;
pub mod roster;
pub mod transfer;

pub use roster::{Roster, RosterStats, RollNumber, HIGH_SCORE_THRESHOLD};
pub use transfer::transfer;
