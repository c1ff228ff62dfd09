//! Doc and trailing comments.

use gots_core::CommentGroup;

use super::Emitter;

impl Emitter<'_> {
    /// `/** ... */` block for `doc`, indented `depth` levels; empty when
    /// there is no text.
    pub(super) fn doc_comment(&self, doc: Option<&CommentGroup>, depth: usize) -> String {
        let Some(doc) = doc else {
            return String::new();
        };
        let lines: Vec<String> = doc
            .lines()
            .into_iter()
            .filter(|l| !l.trim().is_empty())
            .collect();
        if lines.is_empty() {
            return String::new();
        }

        let c = self.c();
        let indent = self.indent(depth);
        let mut out = format!("{indent}{}/**\n", c.comment);
        for line in lines {
            // `*/` inside the text would close the block early
            out.push_str(&format!("{indent} * {}\n", line.replace("*/", "*\\/")));
        }
        out.push_str(&format!("{indent} */{}\n", c.reset));
        out
    }

    /// ` // text` for a same-line comment; empty when there is none.
    pub(super) fn trailing_comment(&self, comment: Option<&CommentGroup>) -> String {
        let Some(comment) = comment else {
            return String::new();
        };
        let text = comment
            .lines()
            .into_iter()
            .filter(|l| !l.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            return String::new();
        }
        let c = self.c();
        format!(" {}// {text}{}", c.comment, c.reset)
    }
}
