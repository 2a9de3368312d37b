//! Single-pass number annotation
//!
//! [`Annotator::annotate`] scans a description string once, left to right.
//! The scanner yields candidate numeric tokens (maximal digit runs plus the
//! `10b5-1` exception literal) after applying the tokenizer-stage
//! exclusions; the rule set then classifies each survivor independently
//! from its local context, and highlighted tokens are rewrapped in an
//! inline span while everything else is copied through verbatim.
//!
//! The whole pipeline is pure and stateless: no I/O, no shared state, no
//! interaction between tokens of the same string. Calls are independent
//! and safe to run concurrently.

mod markup;
mod rules;
mod scanner;

pub use rules::Classification;

use crate::config::AnnotatorConfig;
use scanner::Scanner;

/// Wraps notable numbers in description text with inline highlight spans
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    config: AnnotatorConfig,
}

impl Annotator {
    /// Create an annotator with the default rule tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an annotator with custom rule tables
    pub fn with_config(config: AnnotatorConfig) -> Self {
        Self { config }
    }

    /// The rule tables in use
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Annotate `text`, wrapping each highlighted token in a span and
    /// reproducing every other character exactly.
    ///
    /// Deterministic and infallible: empty input yields empty output, input
    /// without digits is returned unchanged, and the output is never
    /// shorter than the input. Intended for a single pass; re-annotating
    /// already-annotated output would see the digit text inside the spans
    /// again.
    pub fn annotate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        for token in Scanner::new(text, &self.config) {
            out.push_str(&text[copied..token.start]);
            match rules::classify(text, &token, &self.config) {
                Classification::Highlight => {
                    markup::write_span(&mut out, token.text, &self.config.style)
                }
                Classification::Suppress => out.push_str(token.text),
            }
            copied = token.end;
        }
        out.push_str(&text[copied..]);
        out
    }

    /// Coerce any displayable value to text and annotate it
    pub fn annotate_display<T: std::fmt::Display + ?Sized>(&self, value: &T) -> String {
        self.annotate(&value.to_string())
    }
}
