use std::fmt::{self, Display};

/// Renders a node one line per child, nested children indented further.
pub trait PrettyFormat {
    /// # Errors
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result;
}

#[must_use]
pub fn indent(n: usize) -> String {
    "    ".repeat(n)
}

/// Sibling nodes rendered one after another at the outermost level, e.g. the
/// top-level statements of a program.
pub struct Siblings<'a, T>(pub &'a [T]);

impl<T: PrettyFormat> Display for Siblings<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Siblings(nodes) = self;
        nodes.iter().try_for_each(|node| node.pretty_format(f, 0))
    }
}
