//! Comment groups attached to declarations, specs and fields.

use serde::{Deserialize, Serialize};

/// A single `//` or `/* */` comment, with its markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

/// Adjacent comments with no blank line or token between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentGroup {
    #[serde(default)]
    pub list: Vec<Comment>,
}

impl CommentGroup {
    /// Build a group from raw comment texts (markers included).
    pub fn new<I, S>(comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            list: comments
                .into_iter()
                .map(|text| Comment { text: text.into() })
                .collect(),
        }
    }

    /// Build a group of `//` comments from bare lines.
    pub fn line_comments<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(lines.into_iter().map(|l| format!("// {}", l.as_ref())))
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Comment text with markers removed, one entry per line.
    ///
    /// Follows Go's `CommentGroup.Text`: a single space after `//` is dropped,
    /// tool directives (`//go:generate`, `//line`) are skipped, trailing
    /// whitespace is trimmed, leading and trailing blank lines are removed and
    /// runs of blank lines collapse into one.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        for comment in &self.list {
            let raw = comment.text.as_str();
            let body = if let Some(rest) = raw.strip_prefix("//") {
                if is_directive(rest) {
                    continue;
                }
                rest.strip_prefix(' ').unwrap_or(rest)
            } else if let Some(rest) = raw.strip_prefix("/*") {
                rest.strip_suffix("*/").unwrap_or(rest)
            } else {
                raw
            };
            lines.extend(body.split('\n').map(|l| l.trim_end().to_string()));
        }

        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        for line in lines {
            let blank = line.is_empty();
            if blank && out.last().is_none_or(|prev| prev.is_empty()) {
                continue;
            }
            out.push(line);
        }
        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        out
    }

    /// Comment text joined with `\n`, without a trailing newline.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

fn is_directive(rest: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|p| rest.starts_with(p))
    {
        return true;
    }
    // `//go:generate`, `//nolint:xyz`
    let Some((head, tail)) = rest.split_once(':') else {
        return false;
    };
    !head.is_empty()
        && head
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && tail
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
