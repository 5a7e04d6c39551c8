//! This crate implements the lexical analysis phase of the checker. This phase is responsible
//! for tokenizing the source text into a stream of tokens.
//!
//! The final output of this phase is a [`token_stream::TokenStream`], representing the list of
//! tokens of a source text. The tokens are deliberately left unclassified; deciding what each
//! token is happens later, against the same [`vocabulary::Vocabulary`] the tokenizer scanned
//! with.

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

pub mod token;
pub mod token_stream;
pub mod vocabulary;
