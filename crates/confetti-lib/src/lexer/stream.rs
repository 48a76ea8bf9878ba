//! Cursor over the decoded scalar values of a source text.

use rowan::{TextRange, TextSize};

use super::chars::is_forbidden;
use crate::error::{Error, ErrorKind};

/// Scalar buffer with byte offsets, so tokens can carry source spans.
pub(super) struct Stream {
    chars: Vec<(u32, char)>,
    end: u32,
    pos: usize,
}

impl Stream {
    /// `base` is the byte offset of `text` within the full source.
    pub(super) fn new(text: &str, base: u32) -> Self {
        let chars = text
            .char_indices()
            .map(|(i, c)| (base + i as u32, c))
            .collect();
        Self {
            chars,
            end: base + text.len() as u32,
            pos: 0,
        }
    }

    /// Scalar at the cursor, checked for legality. `Ok(None)` at end of input.
    pub(super) fn current(&self) -> Result<Option<char>, Error> {
        let Some(&(offset, c)) = self.chars.get(self.pos) else {
            return Ok(None);
        };
        if is_forbidden(c) {
            let span = TextRange::at(offset.into(), TextSize::of(c));
            return Err(Error::new(ErrorKind::IllegalCharacter(c as u32), span));
        }
        Ok(Some(c))
    }

    /// Unchecked lookahead; `peek(0)` is the scalar at the cursor.
    pub(super) fn peek(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).map(|&(_, c)| c)
    }

    pub(super) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Byte offset of the cursor.
    pub(super) fn offset(&self) -> TextSize {
        self.chars
            .get(self.pos)
            .map_or(self.end, |&(offset, _)| offset)
            .into()
    }

    /// Whether the scalars at the cursor spell `literal`.
    pub(super) fn starts_with(&self, literal: &[char]) -> bool {
        let rest = &self.chars[self.pos.min(self.chars.len())..];
        literal.len() <= rest.len() && rest.iter().zip(literal).all(|(&(_, a), &b)| a == b)
    }

    /// Scalars of a line terminator at the cursor: 2 for CR LF, 1 otherwise.
    pub(super) fn line_terminator_len(&self, at: usize) -> usize {
        match (self.peek(at), self.peek(at + 1)) {
            (Some('\r'), Some('\n')) => 2,
            _ => 1,
        }
    }
}
