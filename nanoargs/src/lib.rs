//! nanoargs, a minimal classify-and-lookup command-line argument parser.
//!
//! The crate partitions an argument vector once, at construction, into
//! positional tokens, boolean flags, and key/value options, then serves
//! typed lookups over the immutable result. Two facades share the same
//! partitioner and differ only in syntax and accessor surface:
//!
//! - [`CmdLine`] accepts `-` and `--` prefixed tokens with values as
//!   separate tokens, and exposes a generic typed `get`.
//! - [`Args`] accepts `--` prefixed tokens with optional `=`-joined values,
//!   and exposes named `get_int`/`get_double` accessors.
#![deny(missing_docs)]

pub use nanoargs_parser as parser;

mod args;
mod cmdline;

pub use args::Args;
pub use cmdline::CmdLine;

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error comes from a required or typed argument lookup.
    #[error(transparent)]
    Parser(#[from] parser::Error),
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate::parser;
    use crate::{Args, CmdLine, Error};

    #[test]
    fn it_should_serve_both_facades_from_one_vector() {
        let argv = ["prog", "--input", "file.txt", "--threads", "4"];

        let cmd = CmdLine::new(argv);
        assert_that!(cmd.get::<String>("--input"), eq(&Ok("file.txt".to_owned())));
        assert_that!(cmd.get::<u32>("--threads"), eq(&Ok(4)));

        let args = Args::parse(argv);
        assert_that!(args.get("input"), eq(&Ok("file.txt")));
        assert_that!(args.get_int("threads"), eq(&Ok(4)));
    }

    #[test]
    fn it_should_report_lookup_failures_through_one_error_type() {
        let args = Args::parse(["prog", "--threads", "not-a-number"]);

        assert_that!(
            args.get_int("threads"),
            eq(&Err(Error::Parser(parser::Error::InvalidFormat {
                name: "--threads".to_owned(),
                value: "not-a-number".to_owned(),
            })))
        );
        assert_that!(
            args.get_int("missing"),
            eq(&Err(Error::Parser(parser::Error::MissingArgument {
                name: "missing".to_owned(),
            })))
        );
    }
}
