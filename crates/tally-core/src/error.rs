//! # Error Types
//!
//! Parse error types for tally-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── ParseError       - Malformed line item input                      │
//! │                                                                         │
//! │  apps/terminal errors (separate crate)                                 │
//! │  └── TerminalError    - ParseError + console I/O failures              │
//! │                                                                         │
//! │  Flow: ParseError → TerminalError → stderr + exit code 1               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every parse error restates the expected usage template, because the
//!    session is fatal on the first bad line and the user gets one message
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Expected input shape, restated in every parse error message.
pub const USAGE: &str = "\tusage:   <quantity> [imported] <product name> at <price>\n\
                         \texample: 1 imported box of chocolates at 10.00";

// =============================================================================
// Parse Error
// =============================================================================

/// Errors from parsing one raw input line into a line item.
///
/// All variants are fatal to the receipt session: the terminal prints the
/// message and exits without printing a receipt.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line does not match the expected shape: missing or malformed
    /// `" at "` separator, nothing before the separator, or no quantity /
    /// product name split.
    #[error("line item format error: {reason}\n{usage}", usage = USAGE)]
    Format { reason: &'static str },

    /// The price segment is not a valid non-negative decimal.
    #[error("price format error: {input:?} is not a non-negative decimal number\n{usage}", usage = USAGE)]
    Price { input: String },

    /// The quantity segment is not a valid integer.
    #[error("quantity format error: {input:?} is not an integer\n{usage}", usage = USAGE)]
    Quantity { input: String },
}

/// Convenience type alias for parse results.
pub type ParseResult<T> = Result<T, ParseError>;

// =============================================================================
// Unit Tests
// =============================================================================
