//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! Demo transcripts go to stdout, so log lines are written to **stderr**. Running the
//! catalog with logging enabled never changes what a demo prints.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default: warnings only (e.g. an unknown demo name)
//! cargo run
//!
//! # Demo start/finish events
//! RUST_LOG=info cargo run
//!
//! # Pattern internals: state transitions, registry lookups, memento capture
//! RUST_LOG=debug cargo run -- state memento
//! ```
//!
//! ## What Gets Traced
//!
//! - **Runner**: each demo runs inside a `demo` span with `demo` and `category` fields
//! - **Lookups**: keypad commands, database factories, brushes, catalog names
//! - **Transitions**: car state changes, observer and room membership changes
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` selects the level, defaulting to `warn`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
