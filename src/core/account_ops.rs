//! Account balance operations
//!
//! This module implements the operations that change an account balance:
//! - Deposits (positive amounts only)
//! - Withdrawals (positive amounts up to the current balance)
//! - Interest accrual for accounts with an interest rate
//!
//! Every operation first computes the new balance with checked arithmetic
//! and only then writes it, so a rejected operation never leaves a partial
//! update behind. Validation failures go through the account's
//! `ValidationPolicy`; arithmetic overflow is always returned.

use crate::types::{Account, LedgerError, ValidationPolicy};
use rust_decimal::Decimal;
use tracing::{debug, warn};

impl Account {
    /// Deposit funds into the account
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to deposit (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative (`InvalidArgument`, strict policy only)
    /// - Adding the amount would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        match self.checked_deposit(amount) {
            Ok(new_balance) => {
                self.balance = new_balance;
                debug!(
                    holder = %self.holder_name,
                    %amount,
                    balance = %self.balance,
                    "deposit applied"
                );
                Ok(())
            }
            Err(e) => self.reject("deposit", e),
        }
    }

    /// Withdraw funds from the account
    ///
    /// Withdrawing the whole balance is allowed and leaves it at zero.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to withdraw (must be positive and not exceed the balance)
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` (strict policy only) if the amount is not
    /// positive or exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        match self.checked_withdrawal(amount) {
            Ok(new_balance) => {
                self.balance = new_balance;
                debug!(
                    holder = %self.holder_name,
                    %amount,
                    balance = %self.balance,
                    "withdrawal applied"
                );
                Ok(())
            }
            Err(e) => self.reject("withdrawal", e),
        }
    }

    /// Credit one period of interest to the account
    ///
    /// Adds `balance * rate / 100` for accounts with an interest rate. Plain
    /// accounts, zero balances and zero rates are left unchanged.
    ///
    /// # Returns
    ///
    /// The interest credited (zero when nothing was added)
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the interest or the new balance
    /// cannot be represented.
    pub fn calculate_interest(&mut self) -> Result<Decimal, LedgerError> {
        let Some(rate) = self.config.interest.rate() else {
            return Ok(Decimal::ZERO);
        };

        let interest = self
            .balance
            .checked_mul(rate)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| LedgerError::arithmetic_overflow("interest", &self.holder_name))?;

        if interest.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let new_balance = self
            .balance
            .checked_add(interest)
            .ok_or_else(|| LedgerError::arithmetic_overflow("interest", &self.holder_name))?;

        self.balance = new_balance;
        debug!(
            holder = %self.holder_name,
            %rate,
            %interest,
            balance = %self.balance,
            "interest credited"
        );

        Ok(interest)
    }

    /// Balance after depositing `amount`, without applying it
    pub(crate) fn checked_deposit(&self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_argument(format!(
                "Deposit amount must be positive, got {}",
                amount
            )));
        }

        self.balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &self.holder_name))
    }

    /// Balance after withdrawing `amount`, without applying it
    pub(crate) fn checked_withdrawal(&self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO || amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                &self.holder_name,
                self.balance,
                amount,
            ));
        }

        self.balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", &self.holder_name))
    }

    /// Route a rejected operation through the validation policy
    fn reject(&self, operation: &str, error: LedgerError) -> Result<(), LedgerError> {
        match self.config.validation {
            ValidationPolicy::Lenient if error.is_validation() => {
                warn!(holder = %self.holder_name, operation, %error, "operation ignored");
                Ok(())
            }
            _ => Err(error),
        }
    }
}
