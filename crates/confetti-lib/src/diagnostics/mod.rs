//! Rendering of tokenizer and parser errors against their source.


use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use crate::error::Error;

/// Builder for rendering a single [`Error`].
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.kind.to_string();
        let range = adjust_range(self.error.span, source.len());

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let mut group = Level::ERROR.primary_title(&message).element(snippet);
        if let Some(hint) = self.error.kind.hint() {
            group = group.element(Level::HELP.message(hint));
        }

        let report: Vec<Group> = vec![group];
        write!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        let span = self.error.span;
        if let Some(p) = self.path {
            write!(w, "{p}: ")?;
        }
        write!(
            w,
            "error: {} at {}..{}",
            self.error.kind,
            u32::from(span.start()),
            u32::from(span.end())
        )
    }
}

/// Widens an empty span to one byte so the caret has something to point at.
fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}
