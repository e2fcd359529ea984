//! Class-style facade: one object built from the process argument vector,
//! queried with a generic typed accessor.

use std::str::FromStr;

use crate::Error;
use crate::parser::{ParsedArgs, Syntax};

/// A partitioned command line recognizing `-` and `--` prefixed tokens, with
/// option values supplied as separate tokens. Lookups take the token as it
/// appeared, prefix included (e.g. `"--output"`, `"-d"`).
#[derive(Clone, Debug)]
pub struct CmdLine {
    args: ParsedArgs,
}

impl CmdLine {
    /// Partition the given argument vector. Token 0 is the program name; an
    /// empty vector is fine and yields an empty partition.
    pub fn new<I>(argv: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        CmdLine {
            args: ParsedArgs::parse(argv, Syntax::DASH),
        }
    }

    /// Partition the arguments of the current process.
    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    /// Check if the flag was seen.
    #[inline(always)]
    pub fn flag(&self, name: &str) -> bool {
        self.args.flag(name)
    }

    /// Check if the name was seen at all, as an option key or as a flag.
    #[inline(always)]
    pub fn has(&self, name: &str) -> bool {
        self.args.has(name)
    }

    /// Required typed lookup. A flag with no value reads as the empty
    /// string, so `get::<String>` on a bare flag returns `""`.
    pub fn get<T>(&self, name: &str) -> Result<T, Error>
    where
        T: FromStr,
    {
        Ok(self.args.get(name)?)
    }

    /// Typed lookup falling back to `default` when the name is absent. A
    /// present but malformed value still fails.
    pub fn get_or<T>(&self, name: &str, default: T) -> Result<T, Error>
    where
        T: FromStr,
    {
        Ok(self.args.get_or(name, default)?)
    }

    /// Every token not consumed as a flag, an option key, or an option
    /// value, in input order.
    #[inline(always)]
    pub fn positional(&self) -> &[String] {
        self.args.positionals()
    }

    /// The first token of the argument vector.
    #[inline(always)]
    pub fn program_name(&self) -> &str {
        self.args.program()
    }
}
