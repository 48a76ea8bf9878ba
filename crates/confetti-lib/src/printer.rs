//! Indented dump of a directive tree.

use std::fmt::Write;

use crate::Colors;
use crate::ast::{Directive, Document};

/// Prints each directive as a `Directive` header followed by its quoted
/// arguments, with subdirectives nested one level deeper.
pub struct TreePrinter<'d> {
    directives: &'d [Directive],
    colors: Colors,
    indent: usize,
}

impl<'d> TreePrinter<'d> {
    pub fn new(document: &'d Document) -> Self {
        Self::for_directives(document.directives())
    }

    pub fn for_directives(directives: &'d [Directive]) -> Self {
        Self {
            directives,
            colors: Colors::OFF,
            indent: 2,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// Spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for directive in self.directives {
            self.format_directive(directive, 0, w)?;
        }
        Ok(())
    }

    fn format_directive(
        &self,
        directive: &Directive,
        depth: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let c = &self.colors;
        let prefix = " ".repeat(self.indent * depth);
        let inner = " ".repeat(self.indent * (depth + 1));

        writeln!(w, "{prefix}{}Directive{}", c.directive, c.reset)?;
        for argument in &directive.arguments {
            writeln!(w, "{inner}{}{:?}{}", c.argument, argument.as_str(), c.reset)?;
        }
        for sub in &directive.subdirectives {
            self.format_directive(sub, depth + 1, w)?;
        }
        Ok(())
    }
}
