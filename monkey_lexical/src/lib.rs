//! This crate implements the lexical analysis phase of the Monkey programming language. This
//! phase is responsible for tokenizing the source code into a sequence of tokens.
//!
//! The [`lexer::Lexer`] produces the tokens lazily, one per call. The
//! [`token_stream::TokenStream`] collects the tokens of a whole source file and reports its
//! illegal characters.

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

pub mod error;
pub mod lexer;
pub mod token;
pub mod token_stream;
