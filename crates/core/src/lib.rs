//! Core library for textkit
//!
//! This crate implements the **Functional Core** of the textkit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`textkit_core`** (this crate): Pure transformation functions with zero I/O
//! - **`textkit`**: Input/output, the CLI and the MCP server (the Imperative Shell)
//!
//! Every tool is a pure function of its input string and a small set of
//! options. It either fully succeeds or returns a [`ToolError`]; nothing is
//! cached or shared between calls, so every function is safe to call from
//! any thread.
//!
//! # Module Organization
//!
//! - [`stats`]: Word, sentence and paragraph counts, reading time, keyword density
//! - [`case`]: Case conversion (upper, title, camel, snake, ...)
//! - [`transform`]: Reversal, palindromes, line dedup, slugs, find and replace
//! - [`format`]: JSON, CSV, XML, YAML and SQL formatting plus CSS/HTML/JS minifiers
//! - [`encode`]: Base64, Base64URL, hex, URL and HTML entity encoders
//! - [`hash`]: Message digests and HMAC
//! - [`curl`]: cURL command to `fetch` snippet translation
//!
//! # Example Usage
//!
//! ```rust
//! use textkit_core::transform::slugify;
//! use textkit_core::encode::hex_to_text;
//!
//! assert_eq!(slugify("Hello World! This is a Title"), "hello-world-this-is-a-title");
//! assert_eq!(hex_to_text("48656c6c6f").unwrap(), "Hello");
//! assert!(hex_to_text("abc").is_err());
//! ```

pub mod case;
pub mod curl;
pub mod encode;
pub mod error;
pub mod format;
pub mod hash;
pub mod stats;
pub mod transform;

pub use error::{ToolError, ToolResult};
