//! Main module for zrxp library functionality
//!
//! The pipeline runs in three stages:
//!
//! - `lexer` turns the source into `logos` tokens with byte spans
//! - `parser` walks the tokens with `chumsky` combinators and yields a span-based parse tree
//! - `building` folds the parse tree into the [`ast::Document`] model
//!
//! `api` wires the stages together behind the strategy switch. Around it sit
//! `tabular` for reading bulk record text, `formats` for output, `config` for
//! layered settings, and `testing` for fluent assertions over parsed documents.

pub mod api;
pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod strategy;
pub mod tabular;
pub mod testing;
