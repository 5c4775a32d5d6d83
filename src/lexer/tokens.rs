use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// One of the type keywords `int`, `float` or `string`.
    Type,
    Identifier,
    Assign, // =
    Number,
    StringLiteral,
    Plus,
    Semicolon,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token, quotes included for string literals.
    pub value: String,
    pub span: Span,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[
            TokenKind::Type,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::StringLiteral,
        ]) {
            write!(f, "{} ({}) @ line {}", self.kind, self.value, self.line)
        } else {
            write!(f, "{} @ line {}", self.kind, self.line)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
