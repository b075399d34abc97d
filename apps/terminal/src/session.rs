//! # Receipt Session
//!
//! The input loop: read line items until a blank line, then print the
//! receipt.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Flow                                     │
//! │                                                                         │
//! │  print banner                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read line ──► blank line or end of input? ──► yes ──► print receipt   │
//! │       │                        │                        and return      │
//! │       │                        no                                       │
//! │       │                        ▼                                        │
//! │       │              parse_line_item ──► Err ──► session aborts        │
//! │       │                        │                 (no receipt)           │
//! │       │                        ▼                                        │
//! │       └───────────────── basket.add                                     │
//! │                                                                         │
//! │  The basket and catalog are plain local values owned by the session:   │
//! │  constructed here, passed by reference, dropped on return.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is generic over reader and writer so the whole session can be
//! exercised in tests with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tally_core::{error::USAGE, format_receipt, parse_line_item, Basket, Catalog, ReceiptTotals};

use crate::error::TerminalError;

/// Runs one receipt session: banner, input loop, receipt.
///
/// Reads newline-delimited line items from `input`. A blank line (or end
/// of input) ends the session and prints the receipt for everything
/// entered so far. The first malformed line aborts the session with an
/// error and no receipt.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), TerminalError> {
    let catalog = Catalog::standard();
    let mut basket = Basket::new();

    print_banner(&mut output)?;
    info!(catalog_products = catalog.len(), "session started");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            break;
        }

        let item = match parse_line_item(line, &catalog) {
            Ok(item) => item,
            Err(err) => {
                warn!(line = %line, "rejected line item, aborting session");
                return Err(err.into());
            }
        };
        debug!(
            quantity = item.quantity,
            product = %item.product,
            imported = item.imported,
            sales_taxable = item.sales_taxable,
            "line item accepted"
        );
        basket.add(item);
    }

    output.write_all(format_receipt(&basket).as_bytes())?;
    output.flush()?;

    let totals = ReceiptTotals::of(&basket);
    info!(
        items = basket.len(),
        sales_taxes = %totals.sales_taxes,
        total = %totals.total,
        "receipt printed"
    );

    Ok(())
}

/// Prints the static usage banner.
fn print_banner<W: Write>(output: &mut W) -> Result<(), TerminalError> {
    writeln!(output, "TALLY CHECKOUT TERMINAL")?;
    writeln!(output)?;
    writeln!(output, "{}", USAGE)?;
    writeln!(
        output,
        "\t( enter a blank line after the last item to print the receipt )"
    )?;
    writeln!(output)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<(), TerminalError>, String) {
        let mut out = Vec::new();
        let result = run_session(Cursor::new(input.to_string()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_banner_precedes_receipt() {
        let (result, output) = run("\n");

        assert!(result.is_ok());
        assert!(output.starts_with("TALLY CHECKOUT TERMINAL"));
        assert!(output.contains("usage:"));
        assert!(output.ends_with("Sales Taxes: 0.00\nTotal: 0.00\n"));
    }

    #[test]
    fn test_whitespace_only_line_ends_session() {
        let (result, output) = run("   \n1 book at 12.49\n");

        assert!(result.is_ok());
        // The session ended before the book line was read as an item
        assert!(output.ends_with("Sales Taxes: 0.00\nTotal: 0.00\n"));
    }

    #[test]
    fn test_end_of_input_prints_receipt_without_blank_line() {
        let (result, output) = run("1 book at 12.49");

        assert!(result.is_ok());
        assert!(output.ends_with("1 book: 12.49\nSales Taxes: 0.00\nTotal: 12.49\n"));
    }

    #[test]
    fn test_malformed_line_aborts_without_receipt() {
        let (result, output) = run("book at 10.00\n\n");

        assert!(matches!(result, Err(TerminalError::Parse(_))));
        assert!(!output.contains("Sales Taxes"));
    }
}
