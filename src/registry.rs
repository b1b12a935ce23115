//! Parser lookup by name.

use indexmap::IndexMap;

use crate::{Error, ErrorKind, GenericParser, MessageParser, ParserConfig, GENERIC};

/// Builds a parser implementation from its configuration.
pub type ParserFactory = fn(&ParserConfig) -> Result<Box<dyn MessageParser>, Error>;

/// A table of parser implementations, keyed by name.
///
/// The table is populated at startup: [`ParserRegistry::new`] registers the
/// builtin [`GenericParser`] under [`GENERIC`], and callers add their own
/// implementations with [`ParserRegistry::register`] before resolving any
/// configuration. Registering an existing name replaces the earlier entry.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    factories: IndexMap<String, ParserFactory>,
}

impl ParserRegistry {
    /// Create a registry holding the builtin parsers.
    pub fn new() -> Self {
        let mut registry = Self {
            factories: IndexMap::new(),
        };
        registry.register(GENERIC, generic);
        registry
    }

    /// Register a parser factory under a name.
    pub fn register(&mut self, name: impl Into<String>, factory: ParserFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Build the parser named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownParser`] when no factory is registered
    /// under `config.name`, or whatever error the factory raises while
    /// preparing the parser.
    pub fn create(&self, config: &ParserConfig) -> Result<Box<dyn MessageParser>, Error> {
        let factory = self
            .factories
            .get(&config.name)
            .ok_or_else(|| Error::with_field(ErrorKind::UnknownParser, config.name.as_str()))?;
        factory(config)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn generic(config: &ParserConfig) -> Result<Box<dyn MessageParser>, Error> {
    Ok(Box::new(GenericParser::from_config(config)?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Commit;

    fn config() -> ParserConfig {
        ParserConfig {
            header: Some(crate::CONVENTIONAL_HEADER.to_owned()),
            footers: Some(IndexMap::new()),
            ..ParserConfig::default()
        }
    }

    #[test]
    fn test_resolves_builtin_generic() {
        let parser = ParserRegistry::new().create(&config()).unwrap();
        let parsed = parser.parse(&Commit::new("fix: add new feature"));

        assert_eq!(parsed["type"], "fix");
    }

    #[test]
    fn test_unknown_name() {
        let config = ParserConfig {
            name: "angular".to_owned(),
            ..config()
        };
        let err = ParserRegistry::new().create(&config).err().unwrap();

        assert_eq!(err.kind(), ErrorKind::UnknownParser);
        assert_eq!(err.field(), Some("angular"));
        assert_eq!(err.to_string(), "unknown parser `angular`");
    }

    #[test]
    fn test_factory_error_propagates() {
        let config = ParserConfig::default();
        let err = ParserRegistry::new().create(&config).err().unwrap();

        assert_eq!(err.kind(), ErrorKind::MissingHeaderPattern);
    }

    #[test]
    fn test_register_replaces_entry() {
        struct NullParser;
        impl MessageParser for NullParser {
            fn from_config(_config: &ParserConfig) -> Result<Self, Error> {
                Ok(NullParser)
            }

            fn parse(&self, _commit: &Commit<'_>) -> crate::FieldMap {
                crate::FieldMap::new()
            }
        }

        fn null(config: &ParserConfig) -> Result<Box<dyn MessageParser>, Error> {
            Ok(Box::new(NullParser::from_config(config)?))
        }

        let mut registry = ParserRegistry::new();
        registry.register(GENERIC, null);

        let parser = registry.create(&config()).unwrap();
        assert!(parser.parse(&Commit::new("fix: anything")).is_empty());
    }
}
