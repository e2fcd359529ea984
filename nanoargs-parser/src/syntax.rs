//! Lexical conventions recognized by a parse.

/// Defines which token shapes a parse treats as flags or option keys.
///
/// Prefixes are matched with `starts_with`, longest first, so listing `--`
/// before `-` keeps long tokens from being misread as short ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Syntax {
    /// Recognized flag/option prefixes, longest first.
    pub prefixes: &'static [&'static str],

    /// Accept `key=value` joined in a single token.
    pub allow_equals_join: bool,
}

impl Syntax {
    /// Short and long dash prefixes, values supplied as separate tokens only.
    pub const DASH: Syntax = Syntax {
        prefixes: &["--", "-"],
        allow_equals_join: false,
    };

    /// Long `--` prefix only, with `=`-joined values accepted.
    pub const LONG: Syntax = Syntax {
        prefixes: &["--"],
        allow_equals_join: true,
    };

    /// Evaluate if the token string carries a recognized prefix.
    #[inline(always)]
    pub fn is_prefixed(&self, input: &str) -> bool {
        self.prefixes.iter().any(|p| input.starts_with(p))
    }
}
