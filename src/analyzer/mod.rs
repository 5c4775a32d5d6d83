//! Semantic analysis module.
//!
//! A flat, cursor driven scan over the token stream. Each iteration looks at
//! the token under the cursor and dispatches through a statement lookup table:
//!
//! - `Type Identifier ;` declares a variable in the symbol table
//! - `Identifier = expr ;` checks an assignment against the declared type
//! - anything else is skipped one token at a time
//!
//! Problems never stop the scan, every one of them becomes a diagnostic line.

pub mod analyzer;
pub mod diagnostics;
pub mod expr;
pub mod lookups;
pub mod stmt;
pub mod symbol_table;
pub mod types;
