//! Parser combinators for the ZRXP grammar
//!
//! One function per production. Choices are ordered and commit to the first
//! alternative that matches; repetitions are greedy and rewind a failed attempt.
//!
//! ```text
//! document       = blank_line* block+ (comment_line | blank_line)* EOI
//! block          = header_section records
//! header_section = comment* header (comment | header)*        (each followed by blank_line*)
//! header_line    = ws? "#" (field "|*|"+)+ ws? line_end
//! comment_line   = ws? "#" "#" (!newline)* line_end
//! field          = (!("|*|" | newline))+
//! records        = (record_line | blank_line)*                 (eager)
//!                | (raw_record_line | blank_line)*             (bulk)
//! record_line    = ws? word (ws word)* ws? line_end
//! raw_record_line= ws? (word | ",") (word | "," | ws)* line_end
//! line_end       = newline | EOI
//! ```

use chumsky::prelude::*;

use crate::zrxp::lexer::Token;
use crate::zrxp::parser::tree::{
    BlockNode, ByteSpan, DocumentNode, HeaderLineNode, HeaderNode, RecordLineNode, RecordsNode,
};
use crate::zrxp::strategy::ParseStrategy;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Helper: optional run of horizontal whitespace
fn whitespace() -> impl Parser<Token, (), Error = ParserError> + Clone {
    filter(Token::is_whitespace).or_not().ignored()
}

/// Helper: a line break or the end of input
fn line_end() -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(Token::Newline).ignored().or(end())
}

/// A line holding nothing but whitespace
pub(crate) fn blank_line() -> impl Parser<Token, ByteSpan, Error = ParserError> + Clone {
    whitespace()
        .then(just(Token::Newline))
        .map_with_span(|_, span| span)
        .labelled("blank line")
}

/// A `##` comment line
pub(crate) fn comment_line() -> impl Parser<Token, ByteSpan, Error = ParserError> + Clone {
    whitespace()
        .then(just(Token::Hash))
        .then(just(Token::Hash))
        .then(filter(|t: &Token| *t != Token::Newline).repeated())
        .map_with_span(|_, span| span)
        .then_ignore(line_end())
        .labelled("comment line")
}

/// A metadata field: everything up to the next separator on the same line
fn header_field() -> impl Parser<Token, ByteSpan, Error = ParserError> + Clone {
    filter(Token::is_value_content)
        .repeated()
        .at_least(1)
        .map_with_span(|_, span| span)
        .labelled("metadata field")
}

/// A `#` header line with one or more separator-terminated fields
pub(crate) fn header_line() -> impl Parser<Token, HeaderLineNode, Error = ParserError> + Clone {
    whitespace()
        .ignore_then(just(Token::Hash))
        .ignore_then(
            header_field()
                .then_ignore(just(Token::Separator).repeated().at_least(1))
                .repeated()
                .at_least(1),
        )
        .then_ignore(whitespace())
        .map_with_span(|fields, span| HeaderLineNode { fields, span })
        .then_ignore(line_end())
        .labelled("header line")
}

/// A record line split into field spans
pub(crate) fn record_line() -> impl Parser<Token, RecordLineNode, Error = ParserError> + Clone {
    let field = just(Token::Word).map_with_span(|_, span: ByteSpan| span);

    whitespace()
        .ignore_then(field.clone())
        .then(just(Token::Whitespace).ignore_then(field).repeated())
        .then_ignore(whitespace())
        .then_ignore(line_end())
        .map(|(first, rest)| {
            let mut fields = Vec::with_capacity(rest.len() + 1);
            fields.push(first);
            fields.extend(rest);
            RecordLineNode { fields }
        })
        .labelled("record line")
}

/// A record line kept whole, line break included
pub(crate) fn raw_record_line() -> impl Parser<Token, ByteSpan, Error = ParserError> + Clone {
    whitespace()
        .then(filter(|t: &Token| matches!(t, Token::Word | Token::Comma)))
        .then(filter(Token::is_raw_record_content).repeated())
        .then(line_end())
        .map_with_span(|_, span| span)
        .labelled("record line")
}

fn eager_records() -> impl Parser<Token, RecordsNode, Error = ParserError> + Clone {
    record_line()
        .map(Some)
        .or(blank_line().to(None))
        .repeated()
        .map(|lines| RecordsNode::Lines(lines.into_iter().flatten().collect()))
}

fn bulk_records() -> impl Parser<Token, RecordsNode, Error = ParserError> + Clone {
    raw_record_line()
        .or(blank_line())
        .repeated()
        .map(RecordsNode::Raw)
}

/// The record run of a block, shaped by the strategy
pub(crate) fn records(
    strategy: ParseStrategy,
) -> BoxedParser<'static, Token, RecordsNode, ParserError> {
    match strategy {
        ParseStrategy::Eager => eager_records().boxed(),
        ParseStrategy::Bulk => bulk_records().boxed(),
    }
}

/// Header lines and comments opening a block; at least one header line
pub(crate) fn header_section() -> impl Parser<Token, Vec<HeaderNode>, Error = ParserError> + Clone
{
    let blanks = blank_line().repeated();
    let comment = comment_line()
        .then_ignore(blanks.clone())
        .map(HeaderNode::Comment);
    let header = header_line().then_ignore(blanks).map(HeaderNode::Line);

    comment
        .clone()
        .repeated()
        .then(header.clone())
        .then(comment.or(header).repeated())
        .map(|((mut nodes, first), rest)| {
            nodes.push(first);
            nodes.extend(rest);
            nodes
        })
}

/// A header section followed by its record run
pub(crate) fn block(
    strategy: ParseStrategy,
) -> impl Parser<Token, BlockNode, Error = ParserError> + Clone {
    header_section()
        .then(records(strategy))
        .map_with_span(|(headers, records), span| BlockNode {
            headers,
            records,
            span,
        })
}

/// Parse a whole ZRXP document
pub(crate) fn document(
    strategy: ParseStrategy,
) -> impl Parser<Token, DocumentNode, Error = ParserError> + Clone {
    let trailing = comment_line().or(blank_line()).repeated();

    blank_line()
        .repeated()
        .ignore_then(block(strategy).repeated().at_least(1))
        .then_ignore(trailing)
        .then_ignore(end())
        .map(|blocks| DocumentNode { blocks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zrxp::lexer::tokenize_with_spans;
    use chumsky::Stream;

    fn run<O>(
        parser: impl Parser<Token, O, Error = ParserError>,
        source: &str,
    ) -> Result<O, Vec<ParserError>> {
        let eoi = source.len()..source.len();
        parser.parse(Stream::from_iter(eoi, tokenize_with_spans(source).into_iter()))
    }

    fn slices<'a>(source: &'a str, spans: &[ByteSpan]) -> Vec<&'a str> {
        spans.iter().map(|s| &source[s.clone()]).collect()
    }

    #[test]
    fn test_header_line_fields() {
        let source = "#SANR2102|*|SNAMEGreim|*|\n";
        let line = run(header_line(), source).unwrap();
        assert_eq!(slices(source, &line.fields), vec!["SANR2102", "SNAMEGreim"]);
    }

    #[test]
    fn test_header_line_repeated_separators() {
        let source = "#SANR2102|*||*|CUNITm|*|";
        let line = run(header_line(), source).unwrap();
        assert_eq!(slices(source, &line.fields), vec!["SANR2102", "CUNITm"]);
    }

    #[test]
    fn test_header_value_may_contain_pipes_and_stars() {
        let source = "#SNAMEa|b*c #d|*|\n";
        let line = run(header_line(), source).unwrap();
        assert_eq!(slices(source, &line.fields), vec!["SNAMEa|b*c #d"]);
    }

    #[test]
    fn test_header_line_trailing_whitespace() {
        let source = "#FOOBAR somevalue|*| \n";
        let line = run(header_line(), source).unwrap();
        assert_eq!(slices(source, &line.fields), vec!["FOOBAR somevalue"]);
    }

    #[test]
    fn test_header_line_requires_separator() {
        assert!(run(header_line(), "#SANR2102\n").is_err());
    }

    #[test]
    fn test_header_line_rejects_text_after_last_separator() {
        assert!(run(header_line().then_ignore(end()), "#SANR1|*|junk\n").is_err());
    }

    #[test]
    fn test_comment_line() {
        let source = "## exported |*| by hand\n";
        let span = run(comment_line(), source).unwrap();
        assert_eq!(&source[span], "## exported |*| by hand");
    }

    #[test]
    fn test_record_line_fields() {
        let source = "  20210101000000\t1.23  200 \n";
        let line = run(record_line(), source).unwrap();
        assert_eq!(
            slices(source, &line.fields),
            vec!["20210101000000", "1.23", "200"]
        );
    }

    #[test]
    fn test_record_line_rejects_comma() {
        assert!(run(record_line().then_ignore(end()), "20210101 1,5\n").is_err());
    }

    #[test]
    fn test_raw_record_line_keeps_everything() {
        let source = "20210101, 1,5 \n";
        let span = run(raw_record_line(), source).unwrap();
        assert_eq!(&source[span], source);
    }

    #[test]
    fn test_header_section_skips_blank_lines_and_comments() {
        let source = "## note\n#SANR1|*|\n\n## more\n#CUNITm|*|\n";
        let nodes = run(header_section(), source).unwrap();
        assert_eq!(nodes.len(), 4);
        assert!(matches!(nodes[0], HeaderNode::Comment(_)));
        assert!(matches!(nodes[1], HeaderNode::Line(_)));
        assert!(matches!(nodes[2], HeaderNode::Comment(_)));
        assert!(matches!(nodes[3], HeaderNode::Line(_)));
    }

    #[test]
    fn test_header_section_requires_header_line() {
        assert!(run(header_section(), "## only a comment\n").is_err());
    }

    #[test]
    fn test_document_splits_blocks_after_records() {
        let source = "#SANR1|*|\n#CUNITm|*|\n1 2\n#SANR2|*|\n3 4\n";
        let doc = run(document(ParseStrategy::Eager), source).unwrap();
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].headers.len(), 2);
        assert_eq!(doc.blocks[1].headers.len(), 1);
    }

    #[test]
    fn test_bulk_records_are_line_spans() {
        let source = "#SANR1|*|\n1 2\n\n3,4\n#SANR2|*|\n";
        let doc = run(document(ParseStrategy::Bulk), source).unwrap();
        match &doc.blocks[0].records {
            RecordsNode::Raw(spans) => {
                assert_eq!(slices(source, spans), vec!["1 2\n", "\n", "3,4\n"]);
            }
            other => panic!("expected raw records, found {:?}", other),
        }
        assert_eq!(doc.blocks[1].records, RecordsNode::Raw(vec![]));
    }

    #[test]
    fn test_document_accepts_trailing_comments() {
        let source = "#SANR1|*|\n1 2\n## end of export\n";
        let doc = run(document(ParseStrategy::Eager), source).unwrap();
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn test_document_rejects_empty_input() {
        assert!(run(document(ParseStrategy::Eager), "").is_err());
        assert!(run(document(ParseStrategy::Bulk), "\n\n").is_err());
    }

    #[test]
    fn test_document_rejects_records_without_header() {
        assert!(run(document(ParseStrategy::Eager), "20210101000000 1.23").is_err());
        assert!(run(document(ParseStrategy::Bulk), "20210101000000 1.23").is_err());
    }
}
