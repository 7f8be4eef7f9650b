//! # depuml-error
//!
//! Unified error handling for depuml.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., ParseFailed, InvalidStructure)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! The conversion is a one-shot batch operation, so there is no retry
//! status machinery: every error aborts the run.
//!
//! ## Usage
//!
//! ```rust
//! use depuml_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "no label definitions")
//!         .with_operation("dot::resolve_labels")
//!         .with_context("file", "deps.dot"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, depuml_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using depuml Error
pub type Result<T> = std::result::Result<T, Error>;
