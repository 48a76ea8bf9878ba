//! Assembles tokens into a directive forest.
//!
//! # Architecture
//!
//! The parser works on token kinds only; extension handling is already done
//! by the lexer. Each scope (the whole document, or the inside of a block)
//! keeps one directive under construction and a list of committed ones.
//!
//! - Arguments accumulate on the directive under construction
//! - Newlines and semicolons commit it, empty directives are dropped
//! - A block is captured up to its matching `}` and parsed recursively
//! - A block after a terminated directive attaches to that directive
//!
//! Recursion depth equals brace nesting depth and is capped by the
//! recursion limit. There is no recovery: the first error is returned.

mod core;


pub use core::{DEFAULT_RECURSION_LIMIT, Parser};

use crate::Result;
use crate::ast::Directive;
use crate::lexer::Token;

/// Parses a token sequence with the default recursion limit.
pub fn parse_tokens(tokens: &[Token]) -> Result<Vec<Directive>> {
    Parser::new(tokens).parse()
}
