//! Error types for the bank ledger
//!
//! Every rejected operation returns one of these errors and leaves the
//! account or student it was applied to unchanged.
//!
//! # Error Categories
//!
//! - **Validation Errors**: non-positive amounts, negative opening balances
//!   or rates, out-of-range marks
//! - **Funds Errors**: withdrawals and transfers that exceed the balance
//! - **Arithmetic Errors**: decimal overflow in balance calculations
//! - **Roster Errors**: duplicate roll numbers
//! - **Report Errors**: CSV or I/O failures while writing reports

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// An argument failed validation
    ///
    /// Raised for non-positive deposit and transfer amounts, negative
    /// opening balances or interest rates, and marks outside their bounds.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected value
        message: String,
    },

    /// Withdrawal or transfer amount exceeds the balance
    ///
    /// Also raised for a withdrawal of a non-positive amount.
    #[error(
        "Insufficient funds or invalid amount for '{holder}': available {available}, requested {requested}"
    )]
    InsufficientFunds {
        /// Holder of the debited account
        holder: String,
        /// Balance at the time of the request
        available: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for '{holder}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Holder of the affected account
        holder: String,
    },

    /// Roll number already taken in a roster
    #[error("Roll number {roll} is already enrolled")]
    DuplicateRollNumber {
        /// The duplicated roll number
        roll: u32,
    },

    /// Report could not be written
    #[error("Report error: {message}")]
    Report {
        /// Description of the CSV or I/O failure
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Report {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::Report {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LedgerError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(holder: &str, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            holder: holder.to_string(),
            available,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, holder: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            holder: holder.to_string(),
        }
    }

    /// Create a DuplicateRollNumber error
    pub fn duplicate_roll_number(roll: u32) -> Self {
        LedgerError::DuplicateRollNumber { roll }
    }

    /// Whether this error comes from a failed validation check
    ///
    /// Only these rejections are softened by the lenient policy.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidArgument { .. } | LedgerError::InsufficientFunds { .. }
        )
    }
}
