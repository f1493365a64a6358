//! # Pattern Catalog
//!
//! > **Twenty Gang-of-Four design patterns, each as a small runnable demo.**
//!
//! Every pattern lives in its own module with a minimal set of types and a `demo`
//! function that drives them through a fixed sequence and writes the result to a sink.
//! The demos share nothing: no global runtime and no data passed between patterns.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Traits at the seams
//! Every "varying responsibility" in a pattern (a brush, a car state, a payment step) is
//! a trait. The context that uses it holds a trait object or a generic parameter.
//! Closed sets with no extension story use enums instead.
//!
//! ### Output is a parameter
//! Demos never print directly. They take `out: &mut dyn std::io::Write`, so the binary
//! passes stdout and the tests pass a `Vec<u8>` and compare transcripts exactly.
//!
//! ### Errors are values
//! Writing can fail, and so can a few pattern operations (an unknown database name, a
//! memento that cannot be decoded). Everything returns [`error::Result`] and propagates
//! with `?`.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Patterns ([`behavioral`], [`creational`], [`structural`])
//! One submodule per pattern, grouped the way the Gang of Four group them.
//!
//! ### 2. The Registry ([`catalog`])
//! - **Role**: Knows every demo by its kebab-case name and runs it inside a tracing span.
//! - **Key items**: [`Catalog`](catalog::Catalog), [`DemoEntry`](catalog::DemoEntry), [`Category`](catalog::Category).
//!
//! ### 3. The Plumbing ([`error`], [`tracing`])
//! - [`CatalogError`](error::CatalogError) for everything that can go wrong.
//! - [`setup_tracing`](tracing::setup_tracing) for `RUST_LOG`-driven logs on stderr.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Every demo, with banners
//! cargo run
//!
//! # A few demos, with pattern internals logged to stderr
//! RUST_LOG=debug cargo run -- state memento
//!
//! # What is in the catalogue
//! cargo run -- --list
//! ```
//!
//! From code:
//!
//! ```rust
//! use pattern_catalog::catalog::Catalog;
//!
//! let mut out = Vec::new();
//! Catalog::new().run("factory-method", &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "1000USD\n");
//! ```

pub mod behavioral;
pub mod catalog;
pub mod creational;
pub mod error;
pub mod structural;
pub mod tracing;
