//! Backslash escapes, shared by the three argument forms.

use rowan::TextRange;

use super::Lexer;
use super::chars::{is_line_terminator, is_whitespace};
use crate::Result;
use crate::error::{Error, ErrorKind};

/// How the surrounding argument is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Quoting {
    Unquoted,
    Single,
    Triple,
}

/// Outcome of decoding one escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Escape {
    /// The escaped scalar, taken literally.
    Char(char),
    /// An escaped line terminator inside a quoted argument: contributes nothing.
    LineJoin,
}

impl Lexer<'_> {
    /// Decodes the escape at the cursor (which must be on `\`) and moves past it.
    pub(super) fn escape(&mut self, quoting: Quoting) -> Result<Escape> {
        let start = self.stream.offset();
        self.stream.advance(1);

        let c = match self.stream.current() {
            Ok(Some(c)) => c,
            Ok(None) => {
                let kind = match quoting {
                    Quoting::Unquoted => ErrorKind::IllegalEscape,
                    Quoting::Single | Quoting::Triple => ErrorKind::IncompleteEscape,
                };
                return Err(self.error_from(kind, start));
            }
            Err(forbidden) => {
                let span = TextRange::new(start, forbidden.span.end());
                return Err(Error::new(ErrorKind::IllegalEscape, span));
            }
        };

        if is_line_terminator(c) {
            let len = self.stream.line_terminator_len(0);
            self.stream.advance(len);
            return match quoting {
                Quoting::Single => Ok(Escape::LineJoin),
                Quoting::Triple => Err(self.error_from(ErrorKind::IncompleteEscape, start)),
                Quoting::Unquoted => Err(self.error_from(ErrorKind::IllegalEscape, start)),
            };
        }

        self.stream.advance(1);
        if is_whitespace(c) {
            return Err(self.error_from(ErrorKind::IllegalEscape, start));
        }
        Ok(Escape::Char(c))
    }
}
