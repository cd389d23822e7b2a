//! I/O module
//!
//! Handles CSV report output.
//!
//! # Components
//!
//! - `csv_format` - Account, roster and statistics reports

pub mod csv_format;

pub use csv_format::{format_money, write_accounts_csv, write_roster_csv, write_stats_csv};
