//! A single-pass partitioner over the process argument vector, with typed
//! lookups over the result.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::lexer::{Token, Tokens};
use crate::syntax::Syntax;

/// Defines the possible errors that may occur during argument lookup.
/// Partitioning itself never fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required lookup found the key in neither the option table nor the
    /// flag set.
    #[error("missing required argument: {name}")]
    MissingArgument {
        /// The key the caller asked for.
        name: String,
    },

    /// A value exists for the key but is not a valid instance of the
    /// requested type.
    #[error("invalid value for argument {name}: {value:?}")]
    InvalidFormat {
        /// The key the caller asked for.
        name: String,

        /// The raw value that failed to convert.
        value: String,
    },
}

/// Defines the result of partitioning an argument vector: the program name,
/// the positional tokens in input order, the flags seen, and the key/value
/// options (keys stored prefix-included, values unparsed).
///
/// The partition is built once and never mutated, so shared references can be
/// read from any number of threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    program: String,
    positionals: Vec<String>,
    flags: BTreeSet<String>,
    options: BTreeMap<String, String>,
}

impl ParsedArgs {
    /// Partition the argument vector in one left-to-right pass. Token 0 is
    /// the program name; an empty vector yields an empty partition.
    ///
    /// A bare token immediately following a prefixed one is always consumed
    /// as that key's value; there is no arity schema to say otherwise. After
    /// a lone `--`, every remaining token is positional verbatim.
    pub fn parse<I>(argv: I, syntax: Syntax) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();

        let mut out = ParsedArgs {
            program: argv.first().cloned().unwrap_or_default(),
            ..ParsedArgs::default()
        };

        let rest = argv.get(1..).unwrap_or_default();
        let mut tokens = Tokens::new(rest, syntax);

        while let Some(token) = tokens.next() {
            match token {
                Token::Separator => {
                    out.positionals
                        .extend(tokens.map(|t| t.text().to_owned()));
                    break;
                }

                Token::Prefixed(key) => {
                    if syntax.allow_equals_join {
                        if let Some((key, value)) = key.split_once('=') {
                            out.options.insert(key.to_owned(), value.to_owned());
                            continue;
                        }
                    }

                    match tokens.peek() {
                        Some(Token::Bare(value)) => {
                            out.options.insert(key.to_owned(), value.to_owned());
                            tokens.next();
                        }
                        _ => {
                            out.flags.insert(key.to_owned());
                        }
                    }
                }

                Token::Bare(value) => out.positionals.push(value.to_owned()),
            }
        }

        out
    }

    /// The first token of the input vector, or `""` if the vector was empty.
    #[inline(always)]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Every token not consumed as a flag, an option key, or an option value,
    /// in input order.
    #[inline(always)]
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Check if the flag was seen. Absence means "not set", never "false".
    #[inline(always)]
    pub fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Check if the name was seen at all, as an option key or as a flag.
    #[inline(always)]
    pub fn has(&self, name: &str) -> bool {
        self.options.contains_key(name) || self.flags.contains(name)
    }

    /// The raw value for the name: the option's string, `""` for a flag with
    /// no value, `None` when absent from both tables.
    pub fn value(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.options.get(name) {
            return Some(value);
        }

        if self.flags.contains(name) {
            return Some("");
        }

        None
    }

    /// Required typed lookup. The whole string must convert; partial parses,
    /// empty strings and non-numeric content all fail.
    pub fn get<T>(&self, name: &str) -> Result<T, Error>
    where
        T: FromStr,
    {
        let raw = self.value(name).ok_or_else(|| Error::MissingArgument {
            name: name.to_owned(),
        })?;

        raw.parse::<T>().map_err(|_| Error::InvalidFormat {
            name: name.to_owned(),
            value: raw.to_owned(),
        })
    }

    /// Typed lookup that falls back to `default` when the name is absent. A
    /// default only covers absence; a present but malformed value still
    /// fails.
    pub fn get_or<T>(&self, name: &str, default: T) -> Result<T, Error>
    where
        T: FromStr,
    {
        match self.value(name) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|_| Error::InvalidFormat {
                name: name.to_owned(),
                value: raw.to_owned(),
            }),
        }
    }
}
