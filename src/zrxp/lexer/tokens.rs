//! Token definitions for the ZRXP format
//!
//! Tokens are defined with the logos derive macro. The token set is deliberately
//! flat: whether a `#` opens a header or a comment, and whether a word is a record
//! field or part of a metadata value, is decided by the parser from context.
use logos::Logos;
use std::fmt;

/// All possible tokens in the ZRXP format
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    // Opens header lines ("#") and comment lines ("##")
    #[token("#")]
    Hash,

    // Metadata field terminator
    #[token("|*|")]
    Separator,

    // Column delimiter for comma separated record layouts
    #[token(",")]
    Comma,

    // Line breaks (any platform convention)
    #[regex(r"\r\n|\n|\r")]
    Newline,

    // Horizontal whitespace (every whitespace character except line breaks)
    #[regex(r"[^\S\r\n]+")]
    Whitespace,

    // Record field: word characters, digits, hyphens and dots
    #[regex(r"[\w.\-]+")]
    Word,

    // Anything else: only legal inside metadata values
    #[regex(r"[^\s\w.\-#,]")]
    Other,
}

impl Token {
    /// Check if this token is horizontal whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Check if this token may appear inside a metadata value
    pub fn is_value_content(&self) -> bool {
        !matches!(self, Token::Separator | Token::Newline)
    }

    /// Check if this token may appear on a bulk record line
    pub fn is_raw_record_content(&self) -> bool {
        matches!(self, Token::Word | Token::Comma | Token::Whitespace)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::Hash => "'#'",
            Token::Separator => "'|*|'",
            Token::Comma => "','",
            Token::Newline => "newline",
            Token::Whitespace => "whitespace",
            Token::Word => "field",
            Token::Other => "character",
        };
        f.write_str(name)
    }
}
