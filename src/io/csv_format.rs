//! CSV report formatting
//!
//! This module centralizes all CSV output concerns:
//! - Account summaries (holder, balance, interest rate)
//! - Roster reports (roll, name, average, grade)
//! - Roster statistics
//!
//! Money is printed with two decimals, rounding half away from zero.
//! Averages are printed with two decimals.

use crate::core::{Roster, RosterStats};
use crate::types::{Account, LedgerError};
use csv::WriterBuilder;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::Write;

/// One line of the roster report
#[derive(Debug, Serialize)]
struct RosterRow<'a> {
    roll: u32,
    name: &'a str,
    average: String,
    grade: char,
}

/// Format a currency amount with two decimals
pub fn format_money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn format_average(average: f64) -> String {
    format!("{:.2}", average)
}

/// Write account summaries to CSV format
///
/// Columns: holder, balance, interest_rate. The interest rate cell is empty
/// for accounts that earn no interest. Rows keep the order of `accounts`.
///
/// # Errors
///
/// Returns `LedgerError::Report` if writing fails.
pub fn write_accounts_csv(
    accounts: &[&Account],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new().from_writer(output);

    writer.write_record(["holder", "balance", "interest_rate"])?;

    for account in accounts {
        writer.write_record(&[
            account.holder_name().to_string(),
            format_money(account.balance()),
            account.interest_rate().map(format_money).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write a roster report to CSV format
///
/// Columns: roll, name, average, grade, in roll-number order.
///
/// # Errors
///
/// Returns `LedgerError::Report` if writing fails.
pub fn write_roster_csv(roster: &Roster, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    // Written explicitly so an empty roster still gets a header
    writer.write_record(["roll", "name", "average", "grade"])?;

    for (roll, student) in roster.iter() {
        writer.serialize(RosterRow {
            roll,
            name: student.name(),
            average: format_average(student.average()),
            grade: student.grade().letter(),
        })?;
    }

    writer.flush()?;

    Ok(())
}

/// Write roster statistics to CSV format
///
/// Columns: students, class_average, highest, lowest, top_student,
/// high_scorers. Absent values are written as empty cells.
///
/// # Errors
///
/// Returns `LedgerError::Report` if writing fails.
pub fn write_stats_csv(stats: &RosterStats, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new().from_writer(output);

    writer.write_record([
        "students",
        "class_average",
        "highest",
        "lowest",
        "top_student",
        "high_scorers",
    ])?;

    writer.write_record(&[
        stats.students.to_string(),
        stats.class_average.map(format_average).unwrap_or_default(),
        stats.highest.map(format_average).unwrap_or_default(),
        stats.lowest.map(format_average).unwrap_or_default(),
        stats.top_student.clone().unwrap_or_default(),
        stats.high_scorers.to_string(),
    ])?;

    writer.flush()?;

    Ok(())
}
