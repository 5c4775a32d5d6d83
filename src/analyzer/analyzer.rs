//! The cursor driven analyzer.
//!
//! The analyzer owns a cursor into the token slice, the symbol table of the
//! current run and the diagnostics produced so far. Statement handlers are
//! registered per leading token kind and only ever move the cursor forward.

use std::collections::HashMap;

use log::debug;

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    diagnostics::{Diagnostic, DiagnosticKind},
    lookups::{create_stmt_lookups, StmtHandler, StmtLookup},
    symbol_table::SymbolTable,
};

pub struct Analyzer<'a> {
    /// The tokens being analyzed
    tokens: &'a [Token],
    /// Cursor into `tokens`, never moves backwards
    pos: usize,
    symbols: SymbolTable,
    diagnostics: Vec<Diagnostic>,
    /// Statement handlers keyed by the kind of their leading token
    stmt_lookup: StmtLookup,
}

impl<'a> Analyzer<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let mut analyzer = Analyzer {
            tokens,
            pos: 0,
            symbols: SymbolTable::new(),
            diagnostics: vec![],
            stmt_lookup: HashMap::new(),
        };
        create_stmt_lookups(&mut analyzer);

        analyzer
    }

    /// Returns the token under the cursor, if any remain.
    pub fn current_token(&self) -> Option<&'a Token> {
        let tokens: &'a [Token] = self.tokens;
        tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Moves past the current token and returns it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current_token()?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the current token only when it is of `kind`.
    pub fn advance_if(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.current_token_kind() == Some(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Moves the cursor just past the next token of `kind`, or to the end of
    /// the stream when there is none.
    pub fn skip_past(&mut self, kind: TokenKind) {
        while let Some(token) = self.advance() {
            if token.kind == kind {
                break;
            }
        }
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn get_position(&self) -> usize {
        self.pos
    }

    pub fn report(&mut self, line: usize, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::new(line, kind));
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Scans the whole token stream.
    pub fn run(&mut self) {
        while let Some(kind) = self.current_token_kind() {
            let start = self.pos;

            match self.stmt_lookup.get(&kind).copied() {
                Some(stmt_fn) => stmt_fn(self),
                None => {
                    self.advance();
                }
            }

            // Every iteration consumes at least one token.
            if self.pos == start {
                self.advance();
            }
        }

        debug!(
            "Analyzed {} tokens: {} diagnostics, {} symbols",
            self.tokens.len(),
            self.diagnostics.len(),
            self.symbols.len()
        );
    }
}

/// Analyzes `tokens` with a fresh symbol table.
pub fn analyze(tokens: &[Token]) -> Vec<Diagnostic> {
    let mut analyzer = Analyzer::new(tokens);
    analyzer.run();

    analyzer.into_diagnostics()
}
