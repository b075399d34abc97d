//! # Tally Terminal Entry Point
//!
//! Thin binary wrapper: run one receipt session, map the outcome to the
//! process exit code.
//!
//! ## Exit Codes
//! - `0` - blank line reached, receipt printed
//! - `1` - malformed line item, or any console failure

use std::process::ExitCode;

fn main() -> ExitCode {
    match tally_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("...the program will now exit");
            ExitCode::from(1)
        }
    }
}
