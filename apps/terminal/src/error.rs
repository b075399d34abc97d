//! # Session Error Type
//!
//! Unified error type for the terminal session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in the Terminal                             │
//! │                                                                         │
//! │  run_session()                                                          │
//! │       │                                                                 │
//! │       ├── Bad line item? ──── ParseError ────┐                          │
//! │       │                                      ├──► TerminalError         │
//! │       ├── Console failure? ── io::Error ─────┘         │                │
//! │       │                                                ▼                │
//! │       └── Success ──► receipt on stdout        main(): stderr + exit 1 │
//! │                                                                         │
//! │  Every failure is fatal to the session: no retry, no partial receipt.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use tally_core::ParseError;

/// Any failure that ends the terminal session without a receipt.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// A line item could not be parsed. The message already restates the
    /// expected usage, so it is surfaced verbatim.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Reading stdin or writing stdout failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_surface_verbatim() {
        let parse_err = ParseError::Format {
            reason: "missing or malformed ' at ' separator",
        };
        let expected = parse_err.to_string();

        let err: TerminalError = parse_err.into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_io_errors_are_wrapped() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TerminalError = io_err.into();
        assert!(err.to_string().contains("console I/O error"));
    }
}
