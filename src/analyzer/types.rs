use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INT_LITERAL: Regex = Regex::new(r"^\d+$").unwrap();
    static ref FLOAT_LITERAL: Regex = Regex::new(r"^\d+\.\d+$").unwrap();
    static ref STRING_LITERAL: Regex = Regex::new(r#"(?s)^".*"$"#).unwrap();
}

/// The three types a variable can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    Int,
    Float,
    String,
}

impl LiteralType {
    pub fn from_keyword(keyword: &str) -> Option<LiteralType> {
        match keyword {
            "int" => Some(LiteralType::Int),
            "float" => Some(LiteralType::Float),
            "string" => Some(LiteralType::String),
            _ => None,
        }
    }
}

impl Display for LiteralType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralType::Int => write!(f, "int"),
            LiteralType::Float => write!(f, "float"),
            LiteralType::String => write!(f, "string"),
        }
    }
}

/// The type an expression operand, or a whole expression, evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InferredType {
    Known(LiteralType),
    /// Contributed by undeclared identifiers, and the result of an
    /// expression with no typed operand at all.
    Unknown,
}

impl Display for InferredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferredType::Known(ty) => write!(f, "{}", ty),
            InferredType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classifies the text of a number or string literal token.
pub fn classify_literal(value: &str) -> Option<LiteralType> {
    if INT_LITERAL.is_match(value) {
        Some(LiteralType::Int)
    } else if FLOAT_LITERAL.is_match(value) {
        Some(LiteralType::Float)
    } else if STRING_LITERAL.is_match(value) {
        Some(LiteralType::String)
    } else {
        None
    }
}

/// Folds the operand types of an expression into its result type.
///
/// `string` beats `float` beats `int`, with no numeric promotion rules and no
/// operand combination being an error on its own.
pub fn result_type(contributing: &[InferredType]) -> InferredType {
    [LiteralType::String, LiteralType::Float, LiteralType::Int]
        .into_iter()
        .map(InferredType::Known)
        .find(|ty| contributing.contains(ty))
        .unwrap_or(InferredType::Unknown)
}
