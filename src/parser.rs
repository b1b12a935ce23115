//! Message segmentation and field extraction.

use indexmap::IndexMap;
use regex::{Captures, Regex};
use tracing::trace;

use crate::lines::LinesWithTerminator;
use crate::{Commit, Error, ParserConfig, RuleSet, BODY, HEADER};

/// The parse result: field name to non-empty trimmed string.
///
/// Field names are either structural ([`HEADER`], [`BODY`], or a footer
/// name) or capture-group names drawn from the configured patterns. A field
/// that was not extracted is absent; no key ever maps to an empty string.
/// Insertion order follows discovery order, which keeps results
/// deterministic, but callers should treat the mapping as unordered.
pub type FieldMap = IndexMap<String, String>;

/// A parser implementation: preparation from configuration plus extraction.
///
/// Only [`GenericParser`] ships with this crate; the trait leaves room for
/// variants with other segmentation strategies, resolved through a
/// [`ParserRegistry`][crate::ParserRegistry].
pub trait MessageParser {
    /// Prepare a parser instance from its configuration.
    ///
    /// Runs once per instance; all pattern compilation and validation
    /// happens here so that [`MessageParser::parse`] cannot fail.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is structurally invalid or a
    /// pattern does not compile.
    fn from_config(config: &ParserConfig) -> Result<Self, Error>
    where
        Self: Sized;

    /// Extract structured fields from a commit message.
    ///
    /// Never fails: a message that matches none of the configured patterns
    /// yields fewer fields, not an error.
    fn parse(&self, commit: &Commit<'_>) -> FieldMap;
}

/// The rule-driven parser.
///
/// The first line of the message is the header; the header pattern is
/// applied to it and named capture groups become fields. Each remaining
/// line is tested against the footer patterns in table order: a match
/// switches accumulation to that footer, starting with the matching line;
/// everything before the first footer accumulates into the body. Assembled
/// footer text is matched once more against its own pattern to extract
/// nested capture groups.
#[derive(Debug, Clone)]
pub struct GenericParser {
    rules: RuleSet,
}

impl GenericParser {
    /// Create a parser from an already-compiled rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rule set driving this parser.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl MessageParser for GenericParser {
    fn from_config(config: &ParserConfig) -> Result<Self, Error> {
        Ok(Self::new(RuleSet::from_config(config)?))
    }

    fn parse(&self, commit: &Commit<'_>) -> FieldMap {
        let mut elements = FieldMap::new();

        let mut lines = LinesWithTerminator::new(commit.raw());
        let header = lines.next().unwrap_or("").trim();
        elements.insert(HEADER.to_owned(), header.to_owned());
        match captures_at_start(self.rules.header(), header) {
            Some(captures) => merge_groups(self.rules.header(), &captures, &mut elements),
            None => trace!("header pattern did not match"),
        }

        // One pass over the remaining lines. Every line re-evaluates the
        // footer table, so a message can contain several footer sections and
        // the section can switch on any line.
        let mut section = BODY;
        for line in lines {
            for (name, pattern) in self.rules.footers() {
                if matches_at_start(pattern, line) {
                    trace!(footer = name, "footer start matched");
                    section = name;
                    break;
                }
            }
            elements
                .entry(section.to_owned())
                .or_default()
                .push_str(line);
        }

        for value in elements.values_mut() {
            if value.trim().len() != value.len() {
                *value = value.trim().to_owned();
            }
        }

        // Second pass: footer patterns against the assembled footer text.
        // Runs in table order, after header extraction, so collisions on a
        // group name resolve last-write-wins deterministically.
        for (name, pattern) in self.rules.footers() {
            let Some(text) = elements.get(name).cloned() else {
                continue;
            };
            if let Some(captures) = captures_at_start(pattern, &text) {
                merge_groups(pattern, &captures, &mut elements);
            }
        }

        elements.retain(|_, value| !value.is_empty());
        elements
    }
}

// Anchored-at-start semantics on a leftmost-match engine: if any match
// starts at offset 0, the reported match does.
fn matches_at_start(pattern: &Regex, text: &str) -> bool {
    pattern.find(text).is_some_and(|m| m.start() == 0)
}

fn captures_at_start<'t>(pattern: &Regex, text: &'t str) -> Option<Captures<'t>> {
    pattern
        .captures(text)
        .filter(|captures| captures.get(0).is_some_and(|m| m.start() == 0))
}

fn merge_groups(pattern: &Regex, captures: &Captures<'_>, elements: &mut FieldMap) {
    for name in pattern.capture_names().flatten() {
        if let Some(value) = captures.name(name) {
            elements.insert(name.to_owned(), value.as_str().to_owned());
        }
    }
}
