use lazy_static::lazy_static;
use log::{debug, trace};
use regex::{Captures, Regex};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    name: &'static str,
    pattern: &'static str,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(name: &'static str, pattern: &'static str, handler: RegexHandler) -> Self {
        RegexPattern {
            name,
            pattern,
            handler,
        }
    }
}

lazy_static! {
    /// Token patterns in priority order, the first one matching at the
    /// current position wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("Type", r"\b(?:int|float|string)\b", MK_DEFAULT_HANDLER!(TokenKind::Type)),
        RegexPattern::new("Identifier", r"[a-zA-Z_]\w*", MK_DEFAULT_HANDLER!(TokenKind::Identifier)),
        RegexPattern::new("Assign", "=", MK_DEFAULT_HANDLER!(TokenKind::Assign)),
        RegexPattern::new("Number", r"\d+(?:\.\d+)?", MK_DEFAULT_HANDLER!(TokenKind::Number)),
        RegexPattern::new("StringLiteral", "\"[^\"]*\"", MK_DEFAULT_HANDLER!(TokenKind::StringLiteral)),
        RegexPattern::new("Plus", r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("Semicolon", ";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new("Skip", "[ \t]+", skip_handler),
        RegexPattern::new("Newline", "\n", newline_handler),
        RegexPattern::new("Mismatch", "(?s).", unrecognised_handler),
    ];

    /// All patterns joined into one alternation of named groups. Alternation
    /// is leftmost-first, so group order is pattern priority.
    static ref TOKEN_REGEX: Regex = Regex::new(
        &PATTERNS
            .iter()
            .map(|pattern| format!("(?P<{}>{})", pattern.name, pattern.pattern))
            .collect::<Vec<_>>()
            .join("|")
    )
    .unwrap();
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push_token(&mut self, kind: TokenKind, matched: &str) {
        let span = Span {
            start: self.pos,
            end: self.pos + matched.len(),
        };
        let token = MK_TOKEN!(kind, String::from(matched), span, self.line);
        trace!("{}", token);

        self.tokens.push(token);
        self.advance_n(matched.len());
    }

    pub fn remainder(&self) -> &'a str {
        let source: &'a str = self.source;
        &source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
        }
    }

    fn unrecognised(&self, token: &str) -> Error {
        Error::new(
            ErrorImpl::UnrecognisedToken {
                token: token.to_string(),
                line: self.line,
            },
            self.get_position(),
        )
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn newline_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.line += 1;
    lexer.advance_n(matched.len());
    Ok(())
}

fn unrecognised_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    Err(lexer.unrecognised(matched))
}

/// Returns the pattern whose group took part in `captures`.
fn matched_pattern(captures: &Captures) -> Option<&'static RegexPattern> {
    let patterns: &'static Vec<RegexPattern> = &PATTERNS;

    patterns
        .iter()
        .find(|pattern| captures.name(pattern.name).is_some())
}

/// Splits `source` into tokens in a single pass of the combined pattern.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    for captures in TOKEN_REGEX.captures_iter(source) {
        let Some(found) = captures.get(0) else {
            continue;
        };
        // The catch-all keeps matches contiguous, a gap means a skipped character.
        if found.start() != lex.pos {
            break;
        }

        match matched_pattern(&captures) {
            Some(pattern) => (pattern.handler)(&mut lex, found.as_str())?,
            None => break,
        }
    }

    if !lex.at_eof() {
        let token: String = lex.remainder().chars().take(1).collect();
        return Err(lex.unrecognised(&token));
    }

    debug!("Tokenized {} tokens over {} lines", lex.tokens.len(), lex.line);
    Ok(lex.tokens)
}
