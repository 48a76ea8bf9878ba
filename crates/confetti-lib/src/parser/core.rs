//! Parser state and the per-scope assembly loop.

use rowan::TextRange;

use crate::Result;
use crate::ast::{Argument, Directive};
use crate::error::{Error, ErrorKind};
use crate::lexer::{Token, TokenKind};

pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Parses a token sequence into top-level directives.
pub struct Parser<'t> {
    tokens: &'t [Token],
    recursion_limit: u32,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Blocks nested deeper than `limit` fail with [`ErrorKind::NestingTooDeep`].
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(self) -> Result<Vec<Directive>> {
        Scope::new(self.tokens, 0, self.recursion_limit).parse()
    }
}

/// Tokens between a pair of braces, or the whole document.
struct Scope<'t> {
    tokens: &'t [Token],
    depth: u32,
    limit: u32,
    arguments: Vec<Argument>,
    output: Vec<Directive>,
}

impl<'t> Scope<'t> {
    fn new(tokens: &'t [Token], depth: u32, limit: u32) -> Self {
        Self {
            tokens,
            depth,
            limit,
            arguments: Vec::new(),
            output: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Vec<Directive>> {
        let tokens = self.tokens;
        let mut pos = 0;
        while pos < tokens.len() {
            let token = &tokens[pos];
            match token.kind {
                TokenKind::UnquotedArgument
                | TokenKind::QuotedArgument
                | TokenKind::TripleQuotedArgument => {
                    self.arguments.push(Argument::new(token.content.as_str()));
                }
                TokenKind::Semicolon => {
                    if matches!(
                        self.previous_significant(pos),
                        Some(TokenKind::Semicolon | TokenKind::Newline | TokenKind::LineContinuation)
                    ) {
                        return Err(Error::new(ErrorKind::UnexpectedSemicolon, token.span));
                    }
                    self.commit();
                }
                TokenKind::Newline => self.commit(),
                TokenKind::BraceOpen => pos = self.block(pos)?,
                TokenKind::BraceClose => {
                    return Err(Error::new(ErrorKind::UnmatchedCloseBrace, token.span));
                }
                TokenKind::LineContinuation => {
                    if self.arguments.is_empty() {
                        return Err(Error::new(
                            ErrorKind::UnexpectedLineContinuation,
                            token.span,
                        ));
                    }
                }
                TokenKind::Whitespace
                | TokenKind::Comment
                | TokenKind::LeadingMarker
                | TokenKind::TrailingMarker => {}
            }
            pos += 1;
        }

        self.commit();
        Ok(self.output)
    }

    /// Moves the directive under construction to the output, unless it has no arguments.
    fn commit(&mut self) {
        if self.arguments.is_empty() {
            return;
        }
        let arguments = std::mem::take(&mut self.arguments);
        self.output.push(Directive {
            arguments,
            subdirectives: Vec::new(),
        });
    }

    fn previous_significant(&self, pos: usize) -> Option<TokenKind> {
        self.tokens[..pos]
            .iter()
            .rev()
            .map(|t| t.kind)
            .find(|kind| !kind.is_trivia())
    }

    /// Index of the `}` closing the `{` at `open`.
    fn matching_close(&self, open: usize) -> Option<usize> {
        let mut depth = 0u32;
        for (pos, token) in self.tokens.iter().enumerate().skip(open + 1) {
            match token.kind {
                TokenKind::BraceOpen => depth += 1,
                TokenKind::BraceClose if depth == 0 => return Some(pos),
                TokenKind::BraceClose => depth -= 1,
                _ => {}
            }
        }
        None
    }

    /// Parses the block opened at `open` and returns the index of its `}`.
    fn block(&mut self, open: usize) -> Result<usize> {
        let brace = self.tokens[open].span;

        if open == 0
            || open + 1 == self.tokens.len()
            || self.previous_significant(open) == Some(TokenKind::Semicolon)
        {
            return Err(Error::new(ErrorKind::UnexpectedOpenBrace, brace));
        }

        let Some(close) = self.matching_close(open) else {
            let end = self.tokens[self.tokens.len() - 1].span.end();
            let span = TextRange::new(brace.start(), end);
            return Err(Error::new(ErrorKind::UnterminatedBlock, span));
        };

        if self.depth >= self.limit {
            return Err(Error::new(ErrorKind::NestingTooDeep(self.limit), brace));
        }

        let inner = &self.tokens[open + 1..close];
        let children = Scope::new(inner, self.depth + 1, self.limit).parse()?;

        if self.arguments.is_empty() {
            // The block follows a terminator: it belongs to the previous directive.
            let Some(previous) = self.output.last_mut() else {
                return Err(Error::new(ErrorKind::OrphanBlock, brace));
            };
            previous.subdirectives = children;
        } else {
            let arguments = std::mem::take(&mut self.arguments);
            self.output.push(Directive {
                arguments,
                subdirectives: children,
            });
        }

        Ok(close)
    }
}
