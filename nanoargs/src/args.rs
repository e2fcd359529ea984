//! Function-style facade: long `--` options with optional `=`-joined values
//! and named numeric accessors.

use crate::Error;
use crate::parser::{ParsedArgs, Syntax};

/// A partitioned command line recognizing `--` prefixed tokens only, with
/// values supplied either as the next token or joined with `=`. Lookups
/// accept the bare name (`"input"`) as well as the prefixed spelling
/// (`"--input"`).
#[derive(Clone, Debug)]
pub struct Args {
    args: ParsedArgs,
}

impl Args {
    /// Partition the given argument vector. Token 0 is the program name; an
    /// empty vector is fine and yields an empty partition.
    pub fn parse<I>(argv: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Args {
            args: ParsedArgs::parse(argv, Syntax::LONG),
        }
    }

    /// Partition the arguments of the current process.
    pub fn from_env() -> Self {
        Self::parse(std::env::args())
    }

    /// Map a caller-spelled name to the key stored at parse time: the name
    /// verbatim first, then with each recognized prefix prepended.
    fn key(&self, name: &str) -> String {
        if self.args.has(name) {
            return name.to_owned();
        }

        for prefix in Syntax::LONG.prefixes {
            let candidate = format!("{prefix}{name}");
            if self.args.has(&candidate) {
                return candidate;
            }
        }

        name.to_owned()
    }

    /// Check if the flag was seen.
    pub fn flag(&self, name: &str) -> bool {
        self.args.flag(&self.key(name))
    }

    /// Check if the name was seen at all, as an option key or as a flag.
    pub fn has(&self, name: &str) -> bool {
        self.args.has(&self.key(name))
    }

    /// Required string lookup. A flag with no value reads as `""`.
    pub fn get(&self, name: &str) -> Result<&str, Error> {
        let key = self.key(name);

        self.args
            .value(&key)
            .ok_or_else(|| crate::parser::Error::MissingArgument { name: key }.into())
    }

    /// String lookup falling back to `default` when the name is absent.
    /// Never fails; a string value cannot be malformed.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.args.value(&self.key(name)).unwrap_or(default)
    }

    /// Required integer lookup; the whole value must parse.
    pub fn get_int(&self, name: &str) -> Result<i64, Error> {
        Ok(self.args.get(&self.key(name))?)
    }

    /// Integer lookup falling back to `default` when the name is absent. A
    /// present but malformed value still fails.
    pub fn get_int_or(&self, name: &str, default: i64) -> Result<i64, Error> {
        Ok(self.args.get_or(&self.key(name), default)?)
    }

    /// Required floating-point lookup; the whole value must parse.
    pub fn get_double(&self, name: &str) -> Result<f64, Error> {
        Ok(self.args.get(&self.key(name))?)
    }

    /// Floating-point lookup falling back to `default` when the name is
    /// absent. A present but malformed value still fails.
    pub fn get_double_or(&self, name: &str, default: f64) -> Result<f64, Error> {
        Ok(self.args.get_or(&self.key(name), default)?)
    }

    /// Every token not consumed as a flag, an option key, or an option
    /// value, in input order.
    pub fn positional(&self) -> &[String] {
        self.args.positionals()
    }

    /// The first token of the argument vector.
    pub fn program_name(&self) -> &str {
        self.args.program()
    }
}
