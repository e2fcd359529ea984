//! A lexer for classifying raw command-line tokens.

use crate::syntax::Syntax;

/// A classified view over one raw token. The token text is never rewritten;
/// prefixed tokens keep their prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// The literal `--` marker.
    Separator,

    /// A token starting with a recognized prefix (e.g. `-x`, `--verbose`).
    Prefixed(&'a str),

    /// Everything that is neither the marker nor a prefixed token.
    Bare(&'a str),
}

impl<'a> Token<'a> {
    /// Classify one raw token under the given syntax.
    pub fn classify(input: &'a str, syntax: &Syntax) -> Self {
        if input == "--" {
            Token::Separator
        } else if syntax.is_prefixed(input) {
            Token::Prefixed(input)
        } else {
            Token::Bare(input)
        }
    }

    /// The raw text the token was classified from.
    pub fn text(&self) -> &'a str {
        match *self {
            Token::Separator => "--",
            Token::Prefixed(s) | Token::Bare(s) => s,
        }
    }
}

/// Defines a `Tokens` lexer that streams classified tokens from an argument
/// slice, with one token of lookahead.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    argv: &'a [String],
    syntax: Syntax,
    cursor: usize,
}

impl<'a> Tokens<'a> {
    /// Create a lexer over the argument slice.
    pub fn new(argv: &'a [String], syntax: Syntax) -> Self {
        Tokens {
            argv,
            syntax,
            cursor: 0,
        }
    }

    /// Classify the next token without consuming it.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.argv
            .get(self.cursor)
            .map(|arg| Token::classify(arg, &self.syntax))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token)
    }
}
