use crate::lexer::tokens::{Token, TokenKind};

use super::{
    analyzer::Analyzer,
    diagnostics::DiagnosticKind,
    types::{classify_literal, result_type, InferredType},
};

/// Evaluates the right hand side of an assignment up to and including the
/// next `;` and returns its result type.
///
/// Undeclared operands are reported against `line`, the line of the
/// statement being checked.
pub fn parse_expression(analyzer: &mut Analyzer, line: usize) -> InferredType {
    let mut contributing = vec![];

    while let Some(token) = analyzer.current_token() {
        if token.kind == TokenKind::Semicolon {
            break;
        }

        if let Some(ty) = operand_type(analyzer, token, line) {
            contributing.push(ty);
        }
        analyzer.advance();
    }
    analyzer.advance_if(TokenKind::Semicolon);

    result_type(&contributing)
}

fn operand_type(analyzer: &mut Analyzer, token: &Token, line: usize) -> Option<InferredType> {
    match token.kind {
        TokenKind::Identifier => match analyzer.symbols().get_variable(&token.value) {
            Some(ty) => Some(InferredType::Known(ty)),
            None => {
                analyzer.report(
                    line,
                    DiagnosticKind::UndeclaredInExpression {
                        name: token.value.clone(),
                    },
                );
                Some(InferredType::Unknown)
            }
        },
        TokenKind::Number | TokenKind::StringLiteral => {
            classify_literal(&token.value).map(InferredType::Known)
        }
        _ => None,
    }
}
