//! Validation and interest policies
//!
//! Accounts and students are configured at construction time with the
//! policies below. There is no configuration file: callers build the config
//! structs directly or take the defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What to do when an operation is given an invalid value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject the operation with an error
    #[default]
    Strict,

    /// Log a warning and leave the state unchanged
    ///
    /// The operation still returns `Ok(())`.
    Lenient,
}

/// Interest accrual rule attached to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestPolicy {
    /// Plain account, interest calculation is a no-op
    #[default]
    None,

    /// Savings account earning `balance * percent / 100` per accrual
    Rate(Decimal),
}

impl InterestPolicy {
    /// The preset 4% savings rule
    pub fn fixed_savings() -> Self {
        InterestPolicy::Rate(Decimal::new(4, 0))
    }

    /// Rate in percent, if the account earns interest
    pub fn rate(&self) -> Option<Decimal> {
        match self {
            InterestPolicy::None => None,
            InterestPolicy::Rate(rate) => Some(*rate),
        }
    }
}

/// Range a single mark must fall in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkBounds {
    /// 0 to 100 inclusive
    #[default]
    Percentage,

    /// Any integer, negative marks included
    Unbounded,
}

impl MarkBounds {
    pub const PERCENTAGE_MIN: i32 = 0;
    pub const PERCENTAGE_MAX: i32 = 100;

    /// Check whether `mark` is allowed under these bounds
    pub fn contains(&self, mark: i32) -> bool {
        match self {
            MarkBounds::Percentage => {
                (Self::PERCENTAGE_MIN..=Self::PERCENTAGE_MAX).contains(&mark)
            }
            MarkBounds::Unbounded => true,
        }
    }
}

/// Per-account configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    pub validation: ValidationPolicy,
    pub interest: InterestPolicy,
}

impl AccountConfig {
    pub fn new(validation: ValidationPolicy, interest: InterestPolicy) -> Self {
        Self {
            validation,
            interest,
        }
    }
}

/// Per-student configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    pub validation: ValidationPolicy,
    pub bounds: MarkBounds,
}

impl GradingConfig {
    pub fn new(validation: ValidationPolicy, bounds: MarkBounds) -> Self {
        Self { validation, bounds }
    }
}
