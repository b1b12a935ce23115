//! Typed parser configuration.

use indexmap::IndexMap;

use crate::GENERIC;

/// Configuration for a parser, as resolved from the surrounding tool's
/// configuration file.
///
/// The pattern fields stay optional so that an incomplete configuration is
/// representable; [`RuleSet::from_config`][crate::RuleSet::from_config]
/// rejects the absence cases when the rules are compiled. The surrounding
/// tool is expected to deserialize this record from whatever format it uses
/// (enable the `serde` feature) and hand it over as-is.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParserConfig {
    /// Name of the parser implementation to use.
    #[cfg_attr(feature = "serde", serde(default = "default_name"))]
    pub name: String,

    /// Pattern applied to the first line of the message.
    ///
    /// Named capture groups become fields in the parse result.
    #[cfg_attr(feature = "serde", serde(default))]
    pub header: Option<String>,

    /// Table of footer name to footer-start pattern.
    ///
    /// Each pattern both detects the first line of that footer and, once the
    /// footer's text is assembled, extracts named capture groups from it.
    /// Table order is the order footers are tried against each line.
    #[cfg_attr(feature = "serde", serde(default))]
    pub footers: Option<IndexMap<String, String>>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            header: None,
            footers: None,
        }
    }
}

fn default_name() -> String {
    GENERIC.to_owned()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_picks_generic() {
        let config = ParserConfig::default();

        assert_eq!(config.name, GENERIC);
        assert_eq!(config.header, None);
        assert_eq!(config.footers, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_full() {
        let config: ParserConfig = serde_json::from_str(
            r#"{
                "name": "generic",
                "header": "^(?P<type>[a-z]+): (?P<subject>.+)$",
                "footers": {"breaking_change_footer": "^BREAKING CHANGE:.+$"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.name, "generic");
        assert_eq!(
            config.header.as_deref(),
            Some("^(?P<type>[a-z]+): (?P<subject>.+)$")
        );
        let footers = config.footers.unwrap();
        assert_eq!(
            footers.get("breaking_change_footer").map(String::as_str),
            Some("^BREAKING CHANGE:.+$")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_defaults_name() {
        let config: ParserConfig = serde_json::from_str(r#"{"header": "^.*$"}"#).unwrap();

        assert_eq!(config.name, GENERIC);
        assert_eq!(config.footers, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_footer_list() {
        // A footer table must be a mapping; a list is a type error at load
        // time, before any pattern is compiled.
        let err = serde_json::from_str::<ParserConfig>(
            r#"{"header": "^.*$", "footers": ["^BREAKING CHANGE:.+$"]}"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("expected a map"), "{err}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_tokens() {
        use serde_test::Token;

        let config = ParserConfig {
            name: "generic".to_owned(),
            header: Some("^.*$".to_owned()),
            footers: None,
        };
        serde_test::assert_ser_tokens(
            &config,
            &[
                Token::Struct {
                    name: "ParserConfig",
                    len: 3,
                },
                Token::Str("name"),
                Token::Str("generic"),
                Token::Str("header"),
                Token::Some,
                Token::Str("^.*$"),
                Token::Str("footers"),
                Token::None,
                Token::StructEnd,
            ],
        );
    }
}
