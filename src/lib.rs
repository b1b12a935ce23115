//! A rule-driven parser library for extracting structured fields from commit
//! messages.
//!
//! Instead of hardcoding one commit grammar, the parser is configured with a
//! header pattern and a table of footer patterns. Named capture groups in
//! those patterns become fields in the result, so the same parser serves
//! changelog generators, version bumpers, and commit linters that each read
//! commits a little differently.
//!
//! # Example
//!
//! ```rust
//! use commit_fields::MessageParser;
//! use indoc::indoc;
//!
//! let message = indoc!("
//!     docs(example)!: add tested usage example
//!
//!     This example is tested using Rust's doctest capabilities. Having this
//!     example helps people understand how to use the parser.
//!
//!     BREAKING CHANGE: Going from nothing to something, meaning anyone doing
//!     nothing before suddenly has something to do. That sounds like a change
//!     in your break.
//! ");
//!
//! // Patterns are compiled once and reused for every message.
//! let rules = commit_fields::RuleSet::new(
//!     commit_fields::CONVENTIONAL_HEADER,
//!     [("breaking_change_footer", commit_fields::CONVENTIONAL_BREAKING_FOOTER)],
//! ).unwrap();
//! let parser = commit_fields::GenericParser::new(rules);
//!
//! let fields = parser.parse(&commit_fields::Commit::new(message));
//!
//! // Structural fields hold the segmented message text.
//! assert_eq!(fields["header"], "docs(example)!: add tested usage example");
//! assert!(fields["body"].contains("helps people understand"));
//!
//! // Named capture groups from the header pattern become fields too.
//! assert_eq!(fields["type"], "docs");
//! assert_eq!(fields["scope"], "example");
//! assert_eq!(fields["breaking_change_header"], "!");
//!
//! // And so do groups from footer patterns, re-applied to the footer text.
//! assert!(fields["breaking_change_description"].starts_with("Going from nothing"));
//!
//! // A field that was never matched is simply absent.
//! assert!(!fields.contains_key("issue"));
//! ```

#![warn(missing_docs)]

mod commit;
mod config;
mod error;
mod lines;
mod parser;
mod registry;
mod rules;

pub use commit::Commit;
pub use config::ParserConfig;
pub use error::{Error, ErrorKind};
pub use parser::{FieldMap, GenericParser, MessageParser};
pub use registry::{ParserFactory, ParserRegistry};
pub use rules::RuleSet;

/// Field name under which the first line of the message is stored.
pub const HEADER: &str = "header";
/// Field name under which message text accumulates until a footer starts.
pub const BODY: &str = "body";
/// Parser name resolved when a configuration does not pick one.
pub const GENERIC: &str = "generic";

/// Header pattern for the Conventional Commits summary line.
pub const CONVENTIONAL_HEADER: &str =
    r"^(?P<type>[a-z]+)(?:\((?P<scope>\S+)\))?(?P<breaking_change_header>!)?: (?P<subject>.+)$";
/// Footer pattern for the `BREAKING CHANGE:` trailer.
pub const CONVENTIONAL_BREAKING_FOOTER: &str =
    r"^BREAKING CHANGE: (?P<breaking_change_description>.+)$";
