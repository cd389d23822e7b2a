//! Bank Ledger walkthrough binary
//!
//! Runs the scripted ledger and grading walkthrough and prints the account,
//! roster and statistics reports to stdout. Rejected operations are logged
//! to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run > reports.csv
//! RUST_LOG=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (overflow, report could not be written)

use bank_ledger::telemetry;
use bank_ledger::walkthrough;
use std::process;

fn main() {
    telemetry::init();

    let mut output = std::io::stdout();
    if let Err(e) = walkthrough::run(&mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
