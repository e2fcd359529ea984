//! Core tokenizer and partitioner behind the nanoargs facades.

pub mod lexer;
pub mod parser;
pub mod syntax;

pub use parser::{Error, ParsedArgs};
pub use syntax::Syntax;
