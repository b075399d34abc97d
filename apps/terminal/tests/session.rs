//! End-to-end session tests: feed a full console transcript through the
//! session loop and check the receipt that comes out.

use std::io::Cursor;

use tally_terminal::{run_session, TerminalError};

fn run(input: &str) -> (Result<(), TerminalError>, String) {
    let mut out = Vec::new();
    let result = run_session(Cursor::new(input.to_string()), &mut out);
    (result, String::from_utf8(out).expect("receipt is valid UTF-8"))
}

#[test]
fn test_basket_with_exempt_and_taxable_items() {
    let (result, output) = run(
        "2 book at 12.49\n\
         1 music CD at 14.99\n\
         1 chocolate bar at 0.85\n\
         \n",
    );

    assert!(result.is_ok());
    assert!(output.ends_with(
        "2 book: 24.98\n\
         1 music CD: 16.49\n\
         1 chocolate bar: 0.85\n\
         Sales Taxes: 1.50\n\
         Total: 42.32\n"
    ));
}

#[test]
fn test_basket_with_imported_items() {
    let (result, output) = run(
        "1 imported box of chocolates at 10.00\n\
         1 imported bottle of perfume at 47.50\n\
         \n",
    );

    assert!(result.is_ok());
    assert!(output.ends_with(
        "1 imported box of chocolates: 10.50\n\
         1 imported bottle of perfume: 54.65\n\
         Sales Taxes: 7.65\n\
         Total: 65.15\n"
    ));
}

#[test]
fn test_uncatalogued_product_pays_sales_tax() {
    let (result, output) = run("1 flux capacitor at 10.00\n\n");

    assert!(result.is_ok());
    assert!(output.ends_with(
        "1 flux capacitor: 11.00\n\
         Sales Taxes: 1.00\n\
         Total: 11.00\n"
    ));
}

#[test]
fn test_missing_quantity_aborts_session() {
    let (result, output) = run("book at 10.00\n\n");

    let err = match result {
        Err(err) => err,
        Ok(()) => panic!("malformed line must abort the session"),
    };

    // The error restates the expected usage; no receipt was printed
    assert!(err.to_string().contains("usage:"));
    assert!(!output.contains("Sales Taxes"));
    assert!(!output.contains("Total:"));
}

#[test]
fn test_error_on_later_line_discards_earlier_items() {
    let (result, output) = run(
        "1 book at 12.49\n\
         1 music CD at nineteen\n\
         \n",
    );

    assert!(matches!(result, Err(TerminalError::Parse(_))));
    assert!(!output.contains("Sales Taxes"));
}

#[test]
fn test_immediate_blank_line_prints_empty_receipt() {
    let (result, output) = run("\n");

    assert!(result.is_ok());
    assert!(output.ends_with("Sales Taxes: 0.00\nTotal: 0.00\n"));
}

#[test]
fn test_end_of_input_acts_as_blank_line() {
    let (result, output) = run("1 packet of headache pills at 9.75");

    assert!(result.is_ok());
    assert!(output.ends_with(
        "1 packet of headache pills: 9.75\n\
         Sales Taxes: 0.00\n\
         Total: 9.75\n"
    ));
}
