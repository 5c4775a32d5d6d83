use std::fmt::Display;

use super::types::{InferredType, LiteralType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "✅"),
            Status::Failure => write!(f, "❌"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    Declared { name: String, ty: LiteralType },
    Redeclaration { name: String },
    UndeclaredVariable { name: String },
    UndeclaredInExpression { name: String },
    Assigned { name: String },
    TypeMismatch {
        name: String,
        expected: LiteralType,
        got: InferredType,
    },
}

impl DiagnosticKind {
    pub fn status(&self) -> Status {
        match self {
            DiagnosticKind::Declared { .. } | DiagnosticKind::Assigned { .. } => Status::Success,
            _ => Status::Failure,
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::Declared { name, ty } => write!(f, "Declared '{}' as {}", name, ty),
            DiagnosticKind::Redeclaration { name } => write!(f, "Redeclaration of '{}'", name),
            DiagnosticKind::UndeclaredVariable { name } => {
                write!(f, "Undeclared variable '{}'", name)
            }
            DiagnosticKind::UndeclaredInExpression { name } => {
                write!(f, "Undeclared variable '{}' in expression", name)
            }
            DiagnosticKind::Assigned { name } => write!(f, "Assigned to '{}'", name),
            DiagnosticKind::TypeMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "Type mismatch assigning to '{}' (expected {}, got {})",
                name, expected, got
            ),
        }
    }
}

/// One line of analysis output, tied to the line of the statement that
/// triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Diagnostic { line, kind }
    }

    pub fn status(&self) -> Status {
        self.kind.status()
    }

    pub fn is_error(&self) -> bool {
        self.status() == Status::Failure
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {} {}", self.line, self.status(), self.kind)
    }
}
