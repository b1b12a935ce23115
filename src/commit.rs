//! The raw commit message and its boundary trimming.

use std::fmt;

/// A raw commit message, trimmed at its outer boundaries.
///
/// Leading and trailing whitespace, including blank lines, is removed once at
/// construction; the internal structure of the message is untouched. The
/// value borrows the caller's string and is read-only thereafter.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Commit<'a> {
    raw: &'a str,
}

impl<'a> Commit<'a> {
    /// Wrap a raw commit message.
    pub fn new(raw_message: &'a str) -> Self {
        Self {
            raw: raw_message.trim(),
        }
    }

    /// The trimmed message text.
    pub fn raw(&self) -> &'a str {
        self.raw
    }
}

impl fmt::Display for Commit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
