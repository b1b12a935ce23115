//! All errors related to rule-set preparation.

use std::fmt;

/// The error returned when preparing a rule set fails.
///
/// Parsing a message never fails: an unmatched pattern means fewer fields in
/// the result, not an error. Every error this crate produces is raised while
/// validating configuration or compiling patterns.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,

    field: Option<String>,
    source: Option<regex::Error>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            field: None,
            source: None,
        }
    }

    pub(crate) fn with_field(kind: ErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: Some(field.into()),
            source: None,
        }
    }

    pub(crate) fn with_pattern(field: impl Into<String>, source: regex::Error) -> Self {
        Self {
            kind: ErrorKind::InvalidPattern,
            field: Some(field.into()),
            source: Some(source),
        }
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The configuration field the error refers to, when one is known.
    ///
    /// For [`ErrorKind::InvalidPattern`] this is `"header"` or the name of
    /// the footer whose pattern failed to compile. For
    /// [`ErrorKind::UnknownParser`] it is the unresolved parser name.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;

        match self.kind {
            MissingHeaderPattern => f.write_str("missing header pattern"),
            MissingFooterTable => f.write_str("missing footer pattern table"),
            InvalidPattern => match &self.field {
                Some(field) => write!(f, "invalid pattern for `{field}`"),
                None => f.write_str("invalid pattern"),
            },
            UnknownParser => match &self.field {
                Some(name) => write!(f, "unknown parser `{name}`"),
                None => f.write_str("unknown parser"),
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

/// All possible error kinds returned when preparing a rule set.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The configuration does not define a header pattern.
    MissingHeaderPattern,

    /// The configuration does not define a footer pattern table.
    ///
    /// An empty table is valid; an absent one is not.
    MissingFooterTable,

    /// A pattern string is not valid regex syntax.
    InvalidPattern,

    /// No parser is registered under the configured name.
    UnknownParser,
}
