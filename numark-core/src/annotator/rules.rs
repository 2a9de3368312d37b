//! Suppression predicates
//!
//! Every candidate the scanner yields is judged against an ordered list of
//! predicates over a bounded context window (up to 50 characters before the
//! token, up to 10 after). A token is highlighted only when no predicate
//! fires; each predicate answers one question: does this number read as a
//! date component, a label reference, or a year?

use super::scanner::Token;
use crate::config::AnnotatorConfig;

/// Characters of context kept before a token
const PREV_WINDOW: usize = 50;
/// Characters of context kept after a token
const NEXT_WINDOW: usize = 10;

/// Case-sensitive month names recognized in written date phrases
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Per-token classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Wrap the token in the highlight span
    Highlight,
    /// Reproduce the token unchanged
    Suppress,
}

/// Classify one surviving candidate against the full predicate list
pub(super) fn classify(text: &str, token: &Token, config: &AnnotatorConfig) -> Classification {
    let context = TokenContext::new(text, token);
    let suppress = context.in_date_phrase()
        || context.preceded_by_label_word(config)
        || context.preceded_by_year_like_word()
        || config.exception_tokens.iter().any(|t| t == token.text)
        || is_suppressed_year(token.text, config);
    if suppress {
        Classification::Suppress
    } else {
        Classification::Highlight
    }
}

/// In-range years are suppressed. Only all-digit tokens are parsed; a run
/// too long for `u32` counts as suppressed rather than surfacing an error.
fn is_suppressed_year(token: &str, config: &AnnotatorConfig) -> bool {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match token.parse::<u32>() {
        Ok(n) => config.year_range.contains(n),
        Err(_) => true,
    }
}

/// Bounded context around one candidate token
struct TokenContext<'a> {
    /// Up to [`PREV_WINDOW`] characters before the token
    prev_text: &'a str,
    /// prev_text + token + next_text, as one slice of the input
    window: &'a str,
    /// Byte offset of `window` within the input
    window_start: usize,
    /// Absolute byte span of the token
    token_span: (usize, usize),
}

impl<'a> TokenContext<'a> {
    fn new(text: &'a str, token: &Token) -> Self {
        let window_start = back_up(text, token.start, PREV_WINDOW);
        let window_end = advance(text, token.end, NEXT_WINDOW);
        Self {
            prev_text: &text[window_start..token.start],
            window: &text[window_start..window_end],
            window_start,
            token_span: (token.start, token.end),
        }
    }

    fn last_word(&self) -> Option<&'a str> {
        self.prev_text.split_whitespace().next_back()
    }

    /// The token is the day or the year component of a written date phrase,
    /// `<Month> <digits>[,] <digits>`, found inside the context window.
    fn in_date_phrase(&self) -> bool {
        for month in MONTHS {
            let mut from = 0;
            while let Some(found) = self.window[from..].find(month) {
                let after = from + found + month.len();
                if let Some((day, year)) = date_tail(&self.window[after..]) {
                    let absolute = |span: (usize, usize)| {
                        (
                            self.window_start + after + span.0,
                            self.window_start + after + span.1,
                        )
                    };
                    if absolute(day) == self.token_span || absolute(year) == self.token_span {
                        return true;
                    }
                }
                from += found + month.len();
            }
        }
        false
    }

    /// "Item 7": the word before the token, lowercased, is a label word
    fn preceded_by_label_word(&self, config: &AnnotatorConfig) -> bool {
        self.last_word().is_some_and(|word| {
            config
                .label_words
                .iter()
                .any(|label| word.eq_ignore_ascii_case(label))
        })
    }

    /// "1985-86 23": the word before the token starts with four digits
    fn preceded_by_year_like_word(&self) -> bool {
        self.last_word().is_some_and(|word| {
            let bytes = word.as_bytes();
            bytes.len() >= 4 && bytes[..4].iter().all(u8::is_ascii_digit)
        })
    }
}

/// Parse `\s+ digits ,? \s+ digits` at the start of `s`, returning the day
/// and year digit-run spans relative to `s`
fn date_tail(s: &str) -> Option<((usize, usize), (usize, usize))> {
    let day_start = skip_whitespace(s, 0);
    if day_start == 0 {
        return None;
    }
    let day_end = skip_digits(s, day_start);
    if day_end == day_start {
        return None;
    }
    let mut rest = day_end;
    if s.as_bytes().get(rest) == Some(&b',') {
        rest += 1;
    }
    let year_start = skip_whitespace(s, rest);
    if year_start == rest {
        return None;
    }
    let year_end = skip_digits(s, year_start);
    if year_end == year_start {
        return None;
    }
    Some(((day_start, day_end), (year_start, year_end)))
}

fn skip_whitespace(s: &str, from: usize) -> usize {
    s[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
        .unwrap_or(s.len())
}

fn skip_digits(s: &str, from: usize) -> usize {
    let bytes = s.as_bytes();
    let mut i = from;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Byte offset `count` characters before `pos`, clamped to the start
fn back_up(text: &str, pos: usize, count: usize) -> usize {
    let mut idx = pos;
    for _ in 0..count {
        match text[..idx].char_indices().next_back() {
            Some((i, _)) => idx = i,
            None => break,
        }
    }
    idx
}

/// Byte offset `count` characters after `pos`, clamped to the end
fn advance(text: &str, pos: usize, count: usize) -> usize {
    let mut idx = pos;
    for c in text[pos..].chars().take(count) {
        idx += c.len_utf8();
    }
    idx
}
