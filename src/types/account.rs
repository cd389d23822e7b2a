//! Account-related types for the bank ledger
//!
//! This module defines the Account structure and its constructors.
//! Balance-changing operations live in `core::account_ops`.

use super::error::LedgerError;
use super::policy::{AccountConfig, InterestPolicy, ValidationPolicy};
use rust_decimal::Decimal;

/// A named holder's monetary balance
///
/// Fields are private: the balance only changes through deposit, withdraw,
/// interest accrual and transfer, which keep it non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Name of the account holder, fixed at construction
    pub(crate) holder_name: String,

    /// Current balance, never negative
    pub(crate) balance: Decimal,

    /// Validation and interest policies
    pub(crate) config: AccountConfig,
}

impl Account {
    /// Open a plain account with strict validation and no interest
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the opening balance is negative.
    pub fn open(
        holder_name: impl Into<String>,
        opening_balance: Decimal,
    ) -> Result<Self, LedgerError> {
        Self::with_config(holder_name, opening_balance, AccountConfig::default())
    }

    /// Open a savings account earning `rate_percent` per interest accrual
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the opening balance or the rate is negative.
    pub fn savings(
        holder_name: impl Into<String>,
        opening_balance: Decimal,
        rate_percent: Decimal,
    ) -> Result<Self, LedgerError> {
        Self::with_config(
            holder_name,
            opening_balance,
            AccountConfig::new(ValidationPolicy::Strict, InterestPolicy::Rate(rate_percent)),
        )
    }

    /// Open an account with explicit policies
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the opening balance is negative or the
    /// interest policy carries a negative rate.
    pub fn with_config(
        holder_name: impl Into<String>,
        opening_balance: Decimal,
        config: AccountConfig,
    ) -> Result<Self, LedgerError> {
        if opening_balance < Decimal::ZERO {
            return Err(LedgerError::invalid_argument(format!(
                "Opening balance must not be negative, got {}",
                opening_balance
            )));
        }

        if let Some(rate) = config.interest.rate() {
            if rate < Decimal::ZERO {
                return Err(LedgerError::invalid_argument(format!(
                    "Interest rate must not be negative, got {}",
                    rate
                )));
            }
        }

        Ok(Account {
            holder_name: holder_name.into(),
            balance: opening_balance,
            config,
        })
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn config(&self) -> AccountConfig {
        self.config
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        self.config.validation
    }

    pub fn interest_policy(&self) -> InterestPolicy {
        self.config.interest
    }

    /// Interest rate in percent, `None` for a plain account
    pub fn interest_rate(&self) -> Option<Decimal> {
        self.config.interest.rate()
    }
}
