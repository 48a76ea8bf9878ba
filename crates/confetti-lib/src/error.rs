//! Error types shared by the tokenizer and the parser.
//!
//! Every failure is fatal: the first error aborts the call and no partial
//! document is returned.

use rowan::{TextRange, TextSize};
use serde::{Serialize, Serializer};

use crate::lexer::chars::is_line_terminator;

/// What went wrong. Lexical kinds come first, structural kinds after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize)]
pub enum ErrorKind {
    #[error("malformed UTF-8")]
    MalformedText,

    #[error("illegal character U+{0:04X}")]
    IllegalCharacter(u32),

    #[error("incomplete escape sequence")]
    IncompleteEscape,

    #[error("illegal escape character")]
    IllegalEscape,

    #[error("unclosed quoted")]
    UnclosedQuoted,

    #[error("unterminated multi-line comment")]
    UnterminatedComment,

    #[error("incomplete expression")]
    IncompleteExpression,

    #[error("unexpected ';'")]
    UnexpectedSemicolon,

    #[error("unexpected '{{'")]
    UnexpectedOpenBrace,

    #[error("expected '}}'")]
    UnterminatedBlock,

    #[error("found '}}' without matching '{{'")]
    UnmatchedCloseBrace,

    #[error("unexpected line continuation")]
    UnexpectedLineContinuation,

    #[error("block has no directive to attach to")]
    OrphanBlock,

    #[error("blocks nested deeper than {0} levels")]
    NestingTooDeep(u32),
}

impl ErrorKind {
    /// Errors raised while tokenizing.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::MalformedText
                | Self::IllegalCharacter(_)
                | Self::IncompleteEscape
                | Self::IllegalEscape
                | Self::UnclosedQuoted
                | Self::UnterminatedComment
                | Self::IncompleteExpression
        )
    }

    /// Errors raised while assembling directives.
    pub fn is_structural(&self) -> bool {
        !self.is_lexical()
    }

    /// Help line shown under the rendered diagnostic.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::IllegalEscape => {
                Some("whitespace and line breaks can only be escaped inside quotes")
            }
            Self::IncompleteEscape => Some("triple-quoted arguments span lines without `\\`"),
            Self::UnclosedQuoted => Some("use `\"\"\"` for arguments spanning several lines"),
            Self::UnexpectedSemicolon => Some("a `;` must follow at least one argument"),
            Self::UnexpectedOpenBrace => Some("a block must follow a directive's arguments"),
            Self::UnexpectedLineContinuation => {
                Some("a line continuation must follow at least one argument")
            }
            Self::OrphanBlock => Some("write at least one argument before the first `{`"),
            _ => None,
        }
    }
}

/// An error with the byte range of the offending source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

pub(crate) fn serialize_text_range<S: Serializer>(
    range: &TextRange,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}

impl Error {
    pub fn new(kind: ErrorKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    pub fn at(kind: ErrorKind, offset: TextSize) -> Self {
        Self::new(kind, TextRange::empty(offset))
    }

    /// 1-based line and column (in scalar values) of the error start.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        line_col(source, self.span.start())
    }
}

/// CR LF counts as a single line break; every other terminator counts on its own.
pub fn line_col(source: &str, offset: TextSize) -> (usize, usize) {
    let offset = usize::from(offset).min(source.len());
    let mut line = 1;
    let mut col = 1;
    let mut prev_cr = false;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' && prev_cr {
            prev_cr = false;
            continue;
        }
        if is_line_terminator(c) {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
        prev_cr = c == '\r';
    }
    (line, col)
}
