//! This crate implements the validation phase of the checker. This phase walks the token stream
//! produced by the lexical phase, classifies every token against the vocabulary, and reports
//! one [`diagnostic::Diagnostic`] per classified token together with a trailing-terminator
//! structural check.
//!
//! Classification failures are recovered by skipping to the next statement terminator; the
//! validator always completes and never raises.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod diagnostic;
pub mod validator;
