use std::cmp::Reverse;

use super::chars::is_forbidden;
use super::stream::Stream;

/// Custom punctuator literals, longest first.
///
/// The sort is stable, so literals of equal length keep their configured order.
#[derive(Debug, Clone, Default)]
pub(super) struct Punctuators(Vec<Vec<char>>);

impl Punctuators {
    /// Parses a newline-separated list; CR LF and CR count as newlines.
    ///
    /// Literals containing a forbidden scalar are dropped, so the tokenizer
    /// reports that scalar as an illegal character instead of matching it.
    pub(super) fn parse(list: &str) -> Self {
        let normalized = list.replace("\r\n", "\n").replace('\r', "\n");
        let mut literals: Vec<Vec<char>> = normalized
            .trim()
            .split('\n')
            .filter(|p| !p.is_empty() && !p.chars().any(is_forbidden))
            .map(|p| p.chars().collect())
            .collect();
        literals.sort_by_key(|p| Reverse(p.len()));
        Self(literals)
    }

    /// Length in scalars of the longest literal at the cursor.
    pub(super) fn match_len(&self, stream: &Stream) -> Option<usize> {
        self.0
            .iter()
            .find(|p| stream.starts_with(p))
            .map(|p| p.len())
    }
}
