//! Directive tree produced by the parser.
//!
//! Arguments are raw scalar sequences; no value is ever interpreted.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::lexer::BYTE_ORDER_MARKS;
use crate::lexer::chars::{is_argument_char, is_line_terminator, is_whitespace};

/// A single argument of a directive, with escapes already resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Argument(String);

impl Argument {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Source form of this argument: bare when possible, otherwise quoted.
    ///
    /// Reserved punctuators and backslashes are escaped. Whitespace or a
    /// leading byte-order mark needs quotes; line terminators need triple
    /// quotes.
    pub fn to_source(&self) -> String {
        let value = self.as_str();
        if value.contains(is_line_terminator) {
            return format!("\"\"\"{}\"\"\"", escape(value, |c| c == '"' || c == '\\'));
        }
        if value.is_empty()
            || value.contains(is_whitespace)
            || value.starts_with(BYTE_ORDER_MARKS)
        {
            return format!("\"{}\"", escape(value, |c| c == '"' || c == '\\'));
        }
        escape(value, |c| c == '\\' || !is_argument_char(c, false))
    }
}

fn escape(value: &str, needs_escape: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl Deref for Argument {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Argument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for Argument {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Argument {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One or more arguments, optionally followed by a block of subdirectives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Directive {
    pub arguments: Vec<Argument>,
    pub subdirectives: Vec<Directive>,
}

impl Directive {
    pub fn new<I, A>(arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        Self {
            arguments: arguments.into_iter().map(Into::into).collect(),
            subdirectives: Vec::new(),
        }
    }

    pub fn with_subdirectives(mut self, subdirectives: Vec<Directive>) -> Self {
        self.subdirectives = subdirectives;
        self
    }

    /// First argument, which by convention names the directive.
    pub fn name(&self) -> Option<&str> {
        self.arguments.first().map(Argument::as_str)
    }

    /// Depth-first walk over this directive and all of its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Directive> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.subdirectives.iter().rev());
            Some(next)
        })
    }

    fn write_source(&self, out: &mut String, depth: usize) {
        let indent = "    ".repeat(depth);
        out.push_str(&indent);
        let args: Vec<_> = self.arguments.iter().map(Argument::to_source).collect();
        out.push_str(&args.join(" "));
        if !self.subdirectives.is_empty() {
            out.push_str(" {\n");
            for sub in &self.subdirectives {
                sub.write_source(out, depth + 1);
            }
            out.push_str(&indent);
            out.push('}');
        }
        out.push('\n');
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_source(&mut out, 0);
        f.write_str(out.trim_end())
    }
}

/// The top-level directives of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    directives: Vec<Directive>,
}

impl Document {
    pub fn new(directives: Vec<Directive>) -> Self {
        Self { directives }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn into_directives(self) -> Vec<Directive> {
        self.directives
    }

    /// Every directive in document order, nested ones included.
    pub fn walk(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter().flat_map(Directive::walk)
    }

    /// Re-serializes the tree; parsing the result yields an equal document.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for directive in &self.directives {
            directive.write_source(&mut out, 0);
        }
        out
    }
}

impl Deref for Document {
    type Target = [Directive];

    fn deref(&self) -> &[Directive] {
        &self.directives
    }
}

impl IntoIterator for Document {
    type Item = Directive;
    type IntoIter = std::vec::IntoIter<Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.iter()
    }
}
