//! Parser module for the ZRXP format
//!
//! The grammar runs over the logos token stream and produces a span-based
//! [`tree::DocumentNode`]. Syntax errors are converted to [`ZrxpError::Syntax`]
//! with a line/column position; there is no recovery.
//!
//! A header field holding a recognized key and nothing else is rejected once
//! the grammar has run, by slicing the field text back out of the source.

pub mod grammar;
pub mod tree;

use chumsky::prelude::*;
use chumsky::Stream;
use tracing::trace;

use crate::zrxp::ast::{MetadataKey, SourceLocation};
use crate::zrxp::error::ZrxpError;
use crate::zrxp::lexer::tokenize_with_spans;
use crate::zrxp::strategy::ParseStrategy;
use grammar::ParserError;
use tree::{ByteSpan, DocumentNode, HeaderNode};

/// Run the grammar over `source` and return the parse tree
pub fn parse_tree(source: &str, strategy: ParseStrategy) -> Result<DocumentNode, ZrxpError> {
    let tokens = tokenize_with_spans(source);
    trace!(tokens = tokens.len(), %strategy, "tokenized source");

    let eoi = source.len()..source.len();
    let tree = grammar::document(strategy)
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| syntax_error(source, errors))?;

    check_metadata_values(source, &tree)?;
    Ok(tree)
}

/// Every recognized key must be followed by a value
fn check_metadata_values(source: &str, tree: &DocumentNode) -> Result<(), ZrxpError> {
    let bare_key = tree
        .blocks
        .iter()
        .flat_map(|block| &block.headers)
        .filter_map(|header| match header {
            HeaderNode::Line(line) => Some(line),
            HeaderNode::Comment(_) => None,
        })
        .flat_map(|line| &line.fields)
        .find(|span| is_bare_key(source, span));

    match bare_key {
        None => Ok(()),
        Some(span) => Err(ZrxpError::Syntax {
            position: SourceLocation::new(source).byte_to_position(span.end),
            found: source.get(span.end..span.end + 3).map(str::to_string),
            expected: vec!["metadata value".to_string()],
        }),
    }
}

fn is_bare_key(source: &str, span: &ByteSpan) -> bool {
    source
        .get(span.clone())
        .and_then(MetadataKey::split_prefix)
        .is_some_and(|(_, value)| value.is_empty())
}

/// Convert the earliest grammar error into a positioned syntax error
fn syntax_error(source: &str, errors: Vec<ParserError>) -> ZrxpError {
    let location = SourceLocation::new(source);

    let Some(error) = errors.into_iter().min_by_key(|e| e.span().start) else {
        return ZrxpError::Syntax {
            position: location.byte_to_position(source.len()),
            found: None,
            expected: Vec::new(),
        };
    };

    let span = error.span();
    let found = error
        .found()
        .and_then(|_| source.get(span.clone()))
        .map(str::to_string);

    let mut expected: Vec<String> = error
        .expected()
        .map(|token| match token {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        })
        .collect();
    expected.sort();
    expected.dedup();

    ZrxpError::Syntax {
        position: location.byte_to_position(span.start),
        found,
        expected,
    }
}
