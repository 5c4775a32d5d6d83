//! Step-through playback of analysis results.
//!
//! Front ends can reveal the output of an analysis one line at a time. The
//! analysis itself runs lazily on the first step and again after a reset.

use log::debug;

use crate::run_analysis;

pub struct Playback {
    source: String,
    results: Vec<String>,
    failures: Vec<bool>,
    revealed: usize,
}

impl Playback {
    pub fn new(source: impl Into<String>) -> Self {
        Playback {
            source: source.into(),
            results: vec![],
            failures: vec![],
            revealed: 0,
        }
    }

    fn ensure_analyzed(&mut self) {
        if self.results.is_empty() {
            match run_analysis(&self.source) {
                Ok(diagnostics) => {
                    self.results = diagnostics.iter().map(|d| d.to_string()).collect();
                    self.failures = diagnostics.iter().map(|d| d.is_error()).collect();
                }
                Err(error) => {
                    debug!("Lexing failed: {}", error);
                    self.results = vec![error.to_string()];
                    self.failures = vec![true];
                }
            }
            self.revealed = 0;
            debug!("Playback prepared {} lines", self.results.len());
        }
    }

    /// Reveals the next line, or returns `None` once everything is shown.
    pub fn step(&mut self) -> Option<&str> {
        self.ensure_analyzed();

        let line = self.results.get(self.revealed)?;
        self.revealed += 1;
        Some(line.as_str())
    }

    /// Reveals every remaining line at once.
    pub fn full(&mut self) -> &[String] {
        self.ensure_analyzed();
        self.revealed = self.results.len();

        &self.results
    }

    pub fn revealed(&self) -> &[String] {
        &self.results[..self.revealed]
    }

    /// Whether any line revealed so far is a failure.
    pub fn has_failures(&self) -> bool {
        self.failures[..self.revealed].iter().any(|failed| *failed)
    }

    /// Total number of result lines, `None` before the first step.
    pub fn total(&self) -> Option<usize> {
        if self.results.is_empty() {
            None
        } else {
            Some(self.results.len())
        }
    }

    pub fn remaining(&self) -> usize {
        self.results.len() - self.revealed
    }

    pub fn is_finished(&self) -> bool {
        !self.results.is_empty() && self.revealed == self.results.len()
    }

    /// Drops the results, the next step analyzes the source again.
    pub fn reset(&mut self) {
        self.results.clear();
        self.failures.clear();
        self.revealed = 0;
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::Playback;

    #[test]
    fn test_step_reveals_in_order() {
        let mut playback = Playback::new("int x;\nx = 1.5;");

        assert_eq!(playback.total(), None);
        assert_eq!(playback.step(), Some("Line 1: ✅ Declared 'x' as int"));
        assert_eq!(playback.total(), Some(2));
        assert_eq!(playback.remaining(), 1);
        assert!(!playback.is_finished());
        assert_eq!(
            playback.step(),
            Some("Line 2: ❌ Type mismatch assigning to 'x' (expected int, got float)")
        );
        assert!(playback.is_finished());
        assert_eq!(playback.step(), None);
        assert_eq!(playback.revealed().len(), 2);
    }

    #[test]
    fn test_full_reveals_everything() {
        let mut playback = Playback::new("int x; int x;");
        playback.step();

        assert_eq!(playback.full().len(), 2);
        assert_eq!(playback.remaining(), 0);
        assert!(playback.is_finished());
    }

    #[test]
    fn test_reset_and_new_source() {
        let mut playback = Playback::new("int x;");
        playback.full();

        playback.set_source("y = 1;");
        assert!(playback.revealed().is_empty());
        assert_eq!(playback.step(), Some("Line 1: ❌ Undeclared variable 'y'"));

        playback.reset();
        assert_eq!(playback.total(), None);
        assert_eq!(playback.step(), Some("Line 1: ❌ Undeclared variable 'y'"));
    }

    #[test]
    fn test_lex_error_is_single_step() {
        let mut playback = Playback::new("int @;");

        assert_eq!(playback.step(), Some("Unexpected token: @ on line 1"));
        assert_eq!(playback.step(), None);
    }

    #[test]
    fn test_has_failures_follows_revealed_lines() {
        let mut playback = Playback::new("int x;\nx = 1.5;");

        assert!(!playback.has_failures());
        playback.step();
        assert!(!playback.has_failures());
        playback.step();
        assert!(playback.has_failures());

        playback.set_source("int x; x = 2;");
        playback.full();
        assert!(!playback.has_failures());
    }

    #[test]
    fn test_lex_error_is_a_failure() {
        let mut playback = Playback::new("int ❌;");

        assert_eq!(playback.step(), Some("Unexpected token: ❌ on line 1"));
        assert!(playback.has_failures());
    }

    #[test]
    fn test_empty_source_never_finishes() {
        let mut playback = Playback::new("\n\n");

        assert_eq!(playback.step(), None);
        assert_eq!(playback.remaining(), 0);
        assert!(!playback.is_finished());
    }
}
