//! # Catalog Errors
//!
//! This module defines the error type shared by every demo and by the catalog runner.
//! Demos write their transcript to a caller-supplied sink, so the common failure is an
//! I/O error on that sink. The remaining variants are the few named failures the
//! patterns themselves can raise.

/// Errors that can occur while looking up or running a demo.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised by the Abstract Factory lookup. The message is part of the demo transcript.
    #[error("ERROR! Database name not recognized.")]
    UnknownDatabase(String),

    #[error("Unknown demo: {0}")]
    UnknownDemo(String),

    /// A memento snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
