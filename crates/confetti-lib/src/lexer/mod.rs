//! Tokenizer for Confetti documents.
//!
//! Every scalar value of the source ends up in exactly one token, so the
//! concatenated token texts reproduce the input byte for byte. Tokens carry
//! their decoded content separately from their span.
//!
//! ## Extensions
//!
//! The tokenizer is the only stage that looks at [`Extensions`]. Once tokens
//! are produced, the parser works on kinds alone.
//!
//! ## Error handling
//!
//! Tokenizing stops at the first error; there is no recovery.

pub mod chars;
mod escape;
mod punctuators;
mod stream;
mod token;

#[cfg(test)]
mod lexer_tests;

use std::fmt::Write;

use rowan::{TextRange, TextSize};

pub use token::{Token, TokenKind};

use self::chars::{is_argument_char, is_line_terminator, is_whitespace};
use self::escape::{Escape, Quoting};
use self::punctuators::Punctuators;
use self::stream::Stream;
use crate::error::{Error, ErrorKind};
use crate::extensions::{Extension, Extensions};
use crate::Result;

pub(crate) const BYTE_ORDER_MARKS: [char; 2] = ['\u{FEFF}', '\u{FFFE}'];
const SUBSTITUTE: char = '\u{001A}';

/// Validates UTF-8, reporting the first invalid sequence as [`ErrorKind::MalformedText`].
pub fn decode(source: &[u8]) -> Result<&str> {
    std::str::from_utf8(source).map_err(|e| {
        let len = e.error_len().unwrap_or(source.len() - e.valid_up_to());
        let span = TextRange::at(
            TextSize::from(e.valid_up_to() as u32),
            TextSize::from(len as u32),
        );
        Error::new(ErrorKind::MalformedText, span)
    })
}

/// Tokenizes raw bytes, failing with [`ErrorKind::MalformedText`] on invalid UTF-8.
pub fn tokenize_bytes(source: &[u8], extensions: &Extensions) -> Result<Vec<Token>> {
    tokenize(decode(source)?, extensions)
}

/// Tokenizes `source` under the given extensions.
///
/// A leading byte-order mark and a trailing U+001A are split off as marker
/// tokens before the main pass.
pub fn tokenize(source: &str, extensions: &Extensions) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut body = source;
    let mut base = 0;

    if let Some(bom) = BYTE_ORDER_MARKS.into_iter().find(|&b| source.starts_with(b)) {
        let span = TextRange::at(0.into(), TextSize::of(bom));
        tokens.push(Token::new(TokenKind::LeadingMarker, bom, span));
        body = &source[bom.len_utf8()..];
        base = bom.len_utf8() as u32;
    }

    let trailing = body.strip_suffix(SUBSTITUTE);
    if let Some(rest) = trailing {
        body = rest;
    }

    let mut lexer = Lexer::new(source, body, base, extensions, tokens);
    lexer.run()?;
    let mut tokens = lexer.tokens;

    if trailing.is_some() {
        let end = TextSize::of(source);
        let span = TextRange::new(end - TextSize::of(SUBSTITUTE), end);
        tokens.push(Token::new(TokenKind::TrailingMarker, SUBSTITUTE, span));
    }

    Ok(tokens)
}

/// Formats tokens one per line as `Kind "text"`, followed by `=> "content"`
/// for arguments whose decoded content differs from their source text.
pub fn dump_tokens(source: &str, tokens: &[Token], include_trivia: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        if !include_trivia && (token.kind.is_trivia() || token.kind == TokenKind::Newline) {
            continue;
        }
        let text = token.text(source);
        write!(out, "{:?} {:?}", token.kind, text).expect("String write never fails");
        if token.kind.is_argument() && token.content != text {
            write!(out, " => {:?}", token.content).expect("String write never fails");
        }
        out.push('\n');
    }
    out
}

struct Lexer<'src> {
    source: &'src str,
    stream: Stream,
    tokens: Vec<Token>,
    c_style_comments: bool,
    expression_arguments: bool,
    punctuators: Punctuators,
}

impl<'src> Lexer<'src> {
    fn new(
        source: &'src str,
        body: &str,
        base: u32,
        extensions: &Extensions,
        tokens: Vec<Token>,
    ) -> Self {
        let punctuators = if extensions.has(Extension::PunctuatorArguments) {
            Punctuators::parse(extensions.get(Extension::PunctuatorArguments).unwrap_or(""))
        } else {
            Punctuators::default()
        };
        Self {
            source,
            stream: Stream::new(body, base),
            tokens,
            c_style_comments: extensions.has(Extension::CStyleComments),
            expression_arguments: extensions.has(Extension::ExpressionArguments),
            punctuators,
        }
    }

    fn run(&mut self) -> Result<()> {
        while let Some(c) = self.stream.current()? {
            let start = self.stream.offset();
            let next = self.stream.peek(1);

            match c {
                c if is_line_terminator(c) => self.single(TokenKind::Newline),
                c if is_whitespace(c) => self.single(TokenKind::Whitespace),
                '/' if self.c_style_comments && next == Some('/') => self.line_comment(2)?,
                '#' => self.line_comment(1)?,
                '/' if self.c_style_comments && next == Some('*') => self.block_comment()?,
                ';' => self.single(TokenKind::Semicolon),
                '{' => self.single(TokenKind::BraceOpen),
                '}' => self.single(TokenKind::BraceClose),
                '\\' if next.is_some_and(is_line_terminator) => self.line_continuation(),
                '(' if self.expression_arguments => self.expression()?,
                _ => self.argument(c)?,
            }

            assert!(
                self.stream.offset() > start,
                "tokenizer is stuck at offset {start:?}"
            );
        }
        Ok(())
    }

    fn slice(&self, start: TextSize, end: TextSize) -> &'src str {
        &self.source[TextRange::new(start, end)]
    }

    fn push(&mut self, kind: TokenKind, content: impl Into<String>, start: TextSize) {
        let span = TextRange::new(start, self.stream.offset());
        self.tokens.push(Token::new(kind, content, span));
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.stream.offset();
        self.stream.advance(1);
        let text = self.slice(start, self.stream.offset());
        self.push(kind, text, start);
    }

    fn error_from(&self, kind: ErrorKind, start: TextSize) -> Error {
        Error::new(kind, TextRange::new(start, self.stream.offset()))
    }

    /// `# ...` or `// ...`, up to but excluding the line terminator.
    fn line_comment(&mut self, prefix: usize) -> Result<()> {
        let start = self.stream.offset();
        self.stream.advance(prefix);
        let content_start = self.stream.offset();
        while let Some(c) = self.stream.current()? {
            if is_line_terminator(c) {
                break;
            }
            self.stream.advance(1);
        }
        let content = self.slice(content_start, self.stream.offset());
        self.push(TokenKind::Comment, content, start);
        Ok(())
    }

    fn block_comment(&mut self) -> Result<()> {
        let start = self.stream.offset();
        self.stream.advance(2);
        let content_start = self.stream.offset();
        loop {
            match self.stream.current()? {
                None => return Err(self.error_from(ErrorKind::UnterminatedComment, start)),
                Some('*') if self.stream.peek(1) == Some('/') => break,
                Some(_) => self.stream.advance(1),
            }
        }
        let content = self.slice(content_start, self.stream.offset());
        self.stream.advance(2);
        self.push(TokenKind::Comment, content, start);
        Ok(())
    }

    /// `\` plus a whole line terminator. A CR LF pair stays in this token,
    /// otherwise its LF would become a `Newline` and end the directive.
    fn line_continuation(&mut self) {
        let start = self.stream.offset();
        let len = 1 + self.stream.line_terminator_len(1);
        self.stream.advance(len);
        self.push(TokenKind::LineContinuation, "", start);
    }

    /// `( ... )` with nested parentheses; must close on the same line.
    fn expression(&mut self) -> Result<()> {
        let start = self.stream.offset();
        self.stream.advance(1);
        let content_start = self.stream.offset();
        let mut depth = 0u32;
        loop {
            match self.stream.current()? {
                None => return Err(self.error_from(ErrorKind::IncompleteExpression, start)),
                Some(c) if is_line_terminator(c) => {
                    return Err(self.error_from(ErrorKind::IncompleteExpression, start));
                }
                Some(')') if depth == 0 => break,
                Some(')') => depth -= 1,
                Some('(') => depth += 1,
                Some(_) => {}
            }
            self.stream.advance(1);
        }
        let content = self.slice(content_start, self.stream.offset());
        self.stream.advance(1);
        self.push(TokenKind::UnquotedArgument, content, start);
        Ok(())
    }

    fn argument(&mut self, c: char) -> Result<()> {
        let start = self.stream.offset();

        if let Some(len) = self.punctuators.match_len(&self.stream) {
            self.stream.advance(len);
            let content = self.slice(start, self.stream.offset());
            self.push(TokenKind::UnquotedArgument, content, start);
            return Ok(());
        }

        if self.stream.starts_with(&['"'; 3]) {
            return self.triple_quoted_argument(start);
        }
        if c == '"' {
            return self.quoted_argument(start);
        }
        self.unquoted_argument(start)
    }

    fn unquoted_argument(&mut self, start: TextSize) -> Result<()> {
        let mut content = String::new();
        while let Some(c) = self.stream.current()? {
            if !is_argument_char(c, self.expression_arguments)
                || self.punctuators.match_len(&self.stream).is_some()
            {
                break;
            }
            if c == '\\' {
                if let Escape::Char(c) = self.escape(Quoting::Unquoted)? {
                    content.push(c);
                }
            } else {
                content.push(c);
                self.stream.advance(1);
            }
        }
        self.push(TokenKind::UnquotedArgument, content, start);
        Ok(())
    }

    fn quoted_argument(&mut self, start: TextSize) -> Result<()> {
        self.stream.advance(1);
        let mut content = String::new();
        loop {
            match self.stream.current()? {
                None => return Err(self.error_from(ErrorKind::UnclosedQuoted, start)),
                Some('"') => {
                    self.stream.advance(1);
                    break;
                }
                Some(c) if is_line_terminator(c) => {
                    return Err(self.error_from(ErrorKind::UnclosedQuoted, start));
                }
                Some('\\') => {
                    if let Escape::Char(c) = self.escape(Quoting::Single)? {
                        content.push(c);
                    }
                }
                Some(c) => {
                    content.push(c);
                    self.stream.advance(1);
                }
            }
        }
        self.push(TokenKind::QuotedArgument, content, start);
        Ok(())
    }

    /// Runs of one or two `"` are content; the third consecutive one closes.
    fn triple_quoted_argument(&mut self, start: TextSize) -> Result<()> {
        self.stream.advance(3);
        let mut content = String::new();
        let mut quotes = 0;
        loop {
            match self.stream.current()? {
                None => return Err(self.error_from(ErrorKind::UnclosedQuoted, start)),
                Some('"') => {
                    self.stream.advance(1);
                    if quotes == 2 {
                        break;
                    }
                    quotes += 1;
                }
                Some(c) => {
                    content.push_str(&"\"".repeat(quotes));
                    quotes = 0;
                    if c == '\\' {
                        if let Escape::Char(c) = self.escape(Quoting::Triple)? {
                            content.push(c);
                        }
                    } else {
                        content.push(c);
                        self.stream.advance(1);
                    }
                }
            }
        }
        self.push(TokenKind::TripleQuotedArgument, content, start);
        Ok(())
    }
}
