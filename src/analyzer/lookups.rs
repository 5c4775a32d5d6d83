use std::collections::HashMap;

use crate::lexer::tokens::TokenKind;

use super::{analyzer::Analyzer, stmt::*};

pub type StmtHandler = fn(&mut Analyzer);

// Lookup table inside the analyzer struct
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

pub fn create_stmt_lookups(analyzer: &mut Analyzer) {
    analyzer.stmt(TokenKind::Type, parse_declaration_stmt);
    analyzer.stmt(TokenKind::Identifier, parse_identifier_stmt);
}
