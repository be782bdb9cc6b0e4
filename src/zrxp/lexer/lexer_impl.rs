//! Implementation of the ZRXP lexer
//!
//! Thin convenience layer over the logos lexer. Every byte of the source ends up
//! in exactly one token so that spans can be sliced back out of the source.

use crate::zrxp::lexer::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Tokenize a string and collect tokens with their byte spans
///
/// Slices logos cannot match are reported as [`Token::Other`], which the
/// parser rejects everywhere except inside metadata values.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(Token::Other);
        tokens.push((token, lexer.span()));
    }

    tokens
}
