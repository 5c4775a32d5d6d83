use log::trace;

use crate::lexer::tokens::TokenKind;

use super::{
    analyzer::Analyzer,
    diagnostics::DiagnosticKind,
    expr::parse_expression,
    types::{InferredType, LiteralType},
};

/// `Type Identifier ;`
///
/// A missing identifier or semicolon leaves the statement incomplete without
/// a diagnostic, the scan resumes wherever the cursor ended up.
pub fn parse_declaration_stmt(analyzer: &mut Analyzer) {
    let Some(type_token) = analyzer.advance() else {
        return;
    };
    let Some(declared) = LiteralType::from_keyword(&type_token.value) else {
        return;
    };

    if let Some(name_token) = analyzer.advance_if(TokenKind::Identifier) {
        let name = name_token.value.clone();

        let declaration = analyzer
            .symbols_mut()
            .declare_variable(name.clone(), declared);

        match declaration {
            Ok(()) => {
                trace!("Declared {} as {} on line {}", name, declared, type_token.line);
                analyzer.report(
                    type_token.line,
                    DiagnosticKind::Declared {
                        name,
                        ty: declared,
                    },
                );
            }
            Err(redeclaration) => analyzer.report(type_token.line, redeclaration),
        }
    }

    analyzer.advance_if(TokenKind::Semicolon);
}

/// `Identifier = expr ;`
///
/// An undeclared target skips the whole statement. A declared target without
/// `=` after it is consumed silently.
pub fn parse_identifier_stmt(analyzer: &mut Analyzer) {
    let Some(name_token) = analyzer.current_token() else {
        return;
    };
    let line = name_token.line;
    let name = &name_token.value;

    let Some(expected) = analyzer.symbols().get_variable(name) else {
        analyzer.report(line, DiagnosticKind::UndeclaredVariable { name: name.clone() });
        analyzer.skip_past(TokenKind::Semicolon);
        return;
    };

    analyzer.advance();
    if analyzer.advance_if(TokenKind::Assign).is_none() {
        return;
    }

    let got = parse_expression(analyzer, line);

    if got == InferredType::Known(expected) {
        analyzer.report(line, DiagnosticKind::Assigned { name: name.clone() });
    } else {
        analyzer.report(
            line,
            DiagnosticKind::TypeMismatch {
                name: name.clone(),
                expected,
                got,
            },
        );
    }
}
