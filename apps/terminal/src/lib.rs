//! # Tally Terminal Library
//!
//! Core library for the Tally console checkout terminal.
//! This is the main entry point that wires the console to the session loop.
//!
//! ## Module Organization
//! ```text
//! tally_terminal/
//! ├── lib.rs          ◄─── You are here (wiring & tracing setup)
//! ├── session.rs      ◄─── Input loop: read → parse → basket → receipt
//! └── error.rs        ◄─── Session error type
//! ```
//!
//! The binary in `main.rs` stays thin: it calls [`run`] and maps the
//! result to the process exit code. Everything else lives here so the
//! session can be driven by tests with in-memory buffers.

pub mod error;
pub mod session;

use std::io;

use tracing_subscriber::EnvFilter;

pub use error::TerminalError;
pub use session::run_session;

/// Runs the terminal against the real console.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, quiet by default)
/// 2. Run one receipt session over locked stdin/stdout
pub fn run() -> Result<(), TerminalError> {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_terminal=debug` - Debug for the terminal only
/// - Default: WARN, so interactive receipts stay clean
///
/// Diagnostics go to stderr; stdout belongs to the receipt.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
