#![allow(clippy::module_inception)]

use log::debug;

use crate::{
    analyzer::{analyzer::analyze, diagnostics::Diagnostic},
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
};

pub mod analyzer;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod playback;

extern crate regex;

/// A byte offset into the analyzed source together with its 1-based line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Tokenizes and analyzes `source`, keeping the diagnostics typed.
pub fn run_analysis(source: &str) -> Result<Vec<Diagnostic>, Error> {
    let tokens = tokenize(source)?;

    Ok(analyze(&tokens))
}

/// Tokenizes and analyzes `source`, rendering every diagnostic as a line.
///
/// A lexical failure short-circuits the pipeline and becomes the only line of
/// the output.
pub fn run_full_analysis(source: &str) -> Vec<String> {
    match run_analysis(source) {
        Ok(diagnostics) => diagnostics
            .iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect(),
        Err(error) => {
            debug!("Lexing failed: {}", error);
            vec![error.to_string()]
        }
    }
}

/// Finds the line containing byte `position` in `source`.
///
/// Returns the 1-based line number, the text of that line and the offset of
/// `position` within it, or `None` when `position` lies past the end.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders the source line of a lexical error with a caret under the
/// offending character.
///
/// ```text
/// Error: UnrecognisedToken
///    |
///  3 | x = # 1;
///    | ----^
/// ```
///
/// The gutter shows the physical line of the character. The lexer's line
/// counter skips newlines inside string literals, so when the two disagree a
/// note names the line the error message reports.
pub fn render_error_snippet(error: &Error, source: &str) -> Option<String> {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.offset)?;

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let mut snippet = String::new();

    if let ErrorTip::None = error.get_tip() {
        snippet.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        snippet.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    snippet.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    snippet.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let arrows = line_text[removed_whitespace..line_pos].chars().count() + 1;
    snippet.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    if position.line != line {
        snippet.push_str(&format!(
            "\n{:>padding$} note: reported as line {}, newlines inside string literals are not counted",
            "=", position.line
        ));
    }

    Some(snippet)
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches(|c: char| c == ' ' || c == '\t').len();

    (String::from(&string[start..]), start)
}
