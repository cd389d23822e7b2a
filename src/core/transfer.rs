//! Fund transfers between two accounts
//!
//! A transfer withdraws from one account and deposits into another. It is
//! always validated strictly, whatever policy the accounts carry, and both
//! new balances are computed before either account is written.

use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;
use tracing::debug;

/// Move `amount` from `from` to `to`
///
/// The two accounts are distinct mutable borrows, so an account cannot be
/// transferred to itself.
///
/// # Arguments
///
/// * `from` - The account to debit
/// * `to` - The account to credit
/// * `amount` - The amount to move (must be positive)
///
/// # Errors
///
/// Returns an error if:
/// - The amount is zero or negative (`InvalidArgument`)
/// - `from` holds less than `amount` (`InsufficientFunds`)
/// - Crediting `to` would overflow (`ArithmeticOverflow`)
///
/// Neither account is modified when an error is returned.
pub fn transfer(
    from: &mut Account,
    to: &mut Account,
    amount: Decimal,
) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::invalid_argument(format!(
            "Transfer amount must be positive, got {}",
            amount
        )));
    }

    let debited = from.checked_withdrawal(amount)?;
    let credited = to.checked_deposit(amount)?;

    from.balance = debited;
    to.balance = credited;

    debug!(
        from = %from.holder_name,
        to = %to.holder_name,
        %amount,
        "transfer applied"
    );

    Ok(())
}
