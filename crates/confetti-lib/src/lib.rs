//! Confetti: lexer and parser for a small configuration language of nested directives.
//!
//! # Example
//!
//! ```
//! use confetti_lib::{Extensions, parse};
//!
//! let source = r#"
//!     server {
//!         listen 8080
//!         root "/var/www/html"
//!     }
//! "#;
//!
//! let document = parse(source, &Extensions::new()).expect("valid document");
//! assert_eq!(document[0].arguments[0], "server");
//! assert_eq!(document[0].subdirectives.len(), 2);
//! ```
//!
//! The pipeline is strictly one-way: text is tokenized into a lossless token
//! sequence ([`tokenize`]), and tokens are assembled into a directive forest
//! ([`parser::parse_tokens`]). Both stages stop at the first error.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod colors;
pub mod diagnostics;
pub mod error;
pub mod extensions;
pub mod lexer;
pub mod parser;
pub mod printer;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod extensions_tests;

pub use ast::{Argument, Directive, Document};
pub use colors::Colors;
pub use diagnostics::ErrorPrinter;
pub use error::{Error, ErrorKind};
pub use extensions::{Extension, Extensions};
pub use lexer::{Token, TokenKind, tokenize, tokenize_bytes};
pub use parser::{DEFAULT_RECURSION_LIMIT, Parser};
pub use printer::TreePrinter;

/// Result type for tokenizing and parsing.
pub type Result<T> = std::result::Result<T, Error>;

pub struct DocumentConfig {
    pub recursion_limit: u32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Tokenizes and parses a document with explicit configuration.
pub struct DocumentBuilder<'src> {
    pub src: &'src str,
    extensions: Extensions,
    config: DocumentConfig,
}

impl<'src> DocumentBuilder<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            extensions: Extensions::new(),
            config: DocumentConfig::default(),
        }
    }

    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Maximum brace nesting depth before failing with [`ErrorKind::NestingTooDeep`].
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn tokenize(&self) -> Result<Vec<Token>> {
        tokenize(self.src, &self.extensions)
    }

    pub fn parse(self) -> Result<Document> {
        let tokens = self.tokenize()?;
        let directives = Parser::new(&tokens)
            .with_recursion_limit(self.config.recursion_limit)
            .parse()?;
        Ok(Document::new(directives))
    }
}

/// Parses `source` into a [`Document`] with the default recursion limit.
pub fn parse(source: &str, extensions: &Extensions) -> Result<Document> {
    DocumentBuilder::new(source)
        .with_extensions(extensions.clone())
        .parse()
}

/// Like [`parse`], but validates UTF-8 first and reports [`ErrorKind::MalformedText`].
pub fn parse_bytes(source: &[u8], extensions: &Extensions) -> Result<Document> {
    let source = lexer::decode(source)?;
    parse(source, extensions)
}
