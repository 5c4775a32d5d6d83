//! Error types and error handling for the analyzer.
//!
//! Semantic problems are never errors here: they are reported as diagnostics
//! and the scan carries on. The only failure that aborts the pipeline is a
//! lexical one, an input character that no token pattern accepts.
//!
//! - Error structures with source position information
//! - Error names and tips for the command line renderer

pub mod errors;
