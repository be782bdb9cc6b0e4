//! Lexer module for the ZRXP format
//!
//! This module contains the tokenization logic for ZRXP, including token
//! definitions and the lexer implementation.
//!
//! The lexer is context free on purpose. ZRXP decides the meaning of a line by
//! its first character (`#` for headers and `##` for comments, anything else
//! for records), which is a parsing concern, so the lexer only separates the
//! `|*|` separator, line breaks, whitespace and field words from everything else.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize_with_spans;
pub use tokens::Token;
