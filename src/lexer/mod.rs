//! Lexical analysis module.
//!
//! Converts source text into a flat stream of tokens. It handles:
//!
//! - Tokenization using an ordered table of regex patterns
//! - Type keywords, identifiers, number and string literals, `=`, `+` and `;`
//! - Line tracking for diagnostics
//! - Rejection of any character no pattern accepts

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
