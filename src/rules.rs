//! Compiled rule sets for message segmentation.

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};

use crate::{Error, ErrorKind, ParserConfig, HEADER};

/// A header pattern and a table of footer patterns, compiled once.
///
/// All patterns are compiled with multiline semantics: `^` and `$` match at
/// line boundaries within the message, not only at the whole-string
/// boundaries. A `RuleSet` is immutable after construction and can be shared
/// across threads; every parse call works on its own state.
#[derive(Debug, Clone)]
pub struct RuleSet {
    header: Regex,
    footers: IndexMap<String, Regex>,
}

impl RuleSet {
    /// Compile a rule set from pattern strings.
    ///
    /// The footer table may be empty. Its order is kept: when several footer
    /// patterns could match the same line, the first entry wins.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`] naming the failing field when a
    /// pattern string is not valid regex syntax.
    pub fn new<I, K, V>(header_pattern: &str, footer_patterns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let header = compile(header_pattern, HEADER)?;
        let footers = footer_patterns
            .into_iter()
            .map(|(name, pattern)| {
                let name = name.into();
                let footer = compile(pattern.as_ref(), &name)?;
                Ok((name, footer))
            })
            .collect::<Result<IndexMap<_, _>, Error>>()?;

        Ok(Self { header, footers })
    }

    /// Compile a rule set from a parser configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingHeaderPattern`] or
    /// [`ErrorKind::MissingFooterTable`] when the configuration leaves the
    /// respective field unset, and [`ErrorKind::InvalidPattern`] when a
    /// pattern string does not compile.
    pub fn from_config(config: &ParserConfig) -> Result<Self, Error> {
        let header = config
            .header
            .as_deref()
            .ok_or_else(|| Error::new(ErrorKind::MissingHeaderPattern))?;
        let footers = config
            .footers
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::MissingFooterTable))?;

        Self::new(header, footers.iter().map(|(name, pattern)| (name.clone(), pattern)))
    }

    /// The compiled header pattern.
    pub fn header(&self) -> &Regex {
        &self.header
    }

    /// The compiled footer patterns, in table order.
    pub fn footers(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.footers
            .iter()
            .map(|(name, pattern)| (name.as_str(), pattern))
    }
}

fn compile(pattern: &str, field: &str) -> Result<Regex, Error> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map_err(|err| Error::with_pattern(field, err))
}
