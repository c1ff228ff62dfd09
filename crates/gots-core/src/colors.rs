//! ANSI color codes for terminal output.
//!
//! Four semantic roles:
//! - Keyword: `export`, `interface`, `type`, `const`, `declare let`
//! - Name: declared names
//! - Comment: doc and trailing comments
//! - Reset: return to default

/// ANSI palette used when TypeScript is printed to a terminal.
///
/// Uses only standard 16-color ANSI codes so it reads in light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub keyword: &'static str,
    pub name: &'static str,
    pub comment: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        keyword: "\x1b[35m",
        name: "\x1b[34m",
        comment: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        keyword: "",
        name: "",
        comment: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
