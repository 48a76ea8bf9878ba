use rowan::TextRange;
use serde::Serialize;

use crate::error::serialize_text_range;

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Bare argument; also expression and punctuator arguments.
    UnquotedArgument,
    /// `"..."`
    QuotedArgument,
    /// `"""..."""`
    TripleQuotedArgument,
    Newline,
    /// `\` directly followed by a line terminator.
    LineContinuation,
    Whitespace,
    /// `# ...`, and with `c_style_comments` also `// ...` and `/* ... */`.
    Comment,
    Semicolon,
    BraceOpen,
    BraceClose,
    /// Byte-order mark at the very start.
    LeadingMarker,
    /// U+001A at the very end.
    TrailingMarker,
}

impl TokenKind {
    pub fn is_argument(self) -> bool {
        matches!(
            self,
            Self::UnquotedArgument | Self::QuotedArgument | Self::TripleQuotedArgument
        )
    }

    /// Tokens the parser looks through when searching for the previous significant token.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Comment | Self::LeadingMarker | Self::TrailingMarker
        )
    }
}

/// A token: kind, decoded content, and the span of its original text.
///
/// The original text is `&source[span]`; see [`Token::text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    #[serde(serialize_with = "serialize_text_range")]
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, content: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind,
            content: content.into(),
            span,
        }
    }

    /// Verbatim source text of this token, escapes and delimiters intact.
    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[std::ops::Range::<usize>::from(self.span)]
    }
}
