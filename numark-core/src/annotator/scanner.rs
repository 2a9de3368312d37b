//! Candidate token scanner
//!
//! Walks the input left to right and yields candidate numeric tokens:
//! either a configured exception literal (matched first, so `10b5-1` is one
//! unit rather than two digit runs) or a maximal run of ASCII digits.
//!
//! The tokenizer-stage exclusions live here as well. A candidate that is
//! preceded by a reference word ("Form ", "Rule ", "Article "), preceded by
//! a four-digit run and a space, or followed by a trailing year literal is
//! not a token at all: the whole run is skipped and never re-entered, so
//! the text passes through unchanged.

use crate::config::AnnotatorConfig;

/// A candidate numeric token found in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset of the first character of the token
    pub start: usize,
    /// Byte offset one past the last character of the token
    pub end: usize,
    /// The matched text
    pub text: &'a str,
}

/// Iterator over the candidate tokens of one input string
pub struct Scanner<'a, 'c> {
    text: &'a str,
    config: &'c AnnotatorConfig,
    pos: usize,
}

impl<'a, 'c> Scanner<'a, 'c> {
    /// Create a scanner over `text`
    pub fn new(text: &'a str, config: &'c AnnotatorConfig) -> Self {
        Self {
            text,
            config,
            pos: 0,
        }
    }

    /// Length of an exception literal starting at `pos`, if any
    fn exception_len(&self, pos: usize) -> Option<usize> {
        let rest = &self.text.as_bytes()[pos..];
        self.config
            .exception_tokens
            .iter()
            .find(|token| rest.starts_with(token.as_bytes()))
            .map(|token| token.len())
    }

    fn excluded(&self, token: &Token<'a>) -> bool {
        self.after_reference_prefix(token.start)
            || self.after_year_prefix(token.start)
            || self.before_trailing_year(token.end)
    }

    /// "Form 10", "Rule 144": reference word plus a single space
    fn after_reference_prefix(&self, start: usize) -> bool {
        let Some(before) = self.text[..start].strip_suffix(' ') else {
            return false;
        };
        self.config
            .reference_prefixes
            .iter()
            .any(|word| before.ends_with(word.as_str()))
    }

    /// "2016 450": a four-digit run and a space read as a year label prefix
    fn after_year_prefix(&self, start: usize) -> bool {
        if start < 5 {
            return false;
        }
        let bytes = self.text.as_bytes();
        bytes[start - 1] == b' ' && bytes[start - 5..start - 1].iter().all(u8::is_ascii_digit)
    }

    /// "31, 2012": optional whitespace, optional comma, optional whitespace,
    /// then a trailing-year literal as a prefix of what follows
    fn before_trailing_year(&self, end: usize) -> bool {
        let rest = self.text[end..].trim_start();
        let rest = rest
            .strip_prefix(',')
            .map(str::trim_start)
            .unwrap_or(rest);
        let bytes = rest.as_bytes();
        if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
            return false;
        }
        match rest[..4].parse::<u32>() {
            Ok(year) => self.config.trailing_years.contains(year),
            Err(_) => false,
        }
    }
}

impl<'a, 'c> Iterator for Scanner<'a, 'c> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            // Exception literals start with an ASCII digit, so matching one
            // here can only happen on a character boundary.
            if let Some(len) = self.exception_len(self.pos) {
                let start = self.pos;
                let end = start + len;
                self.pos = end;
                let token = Token {
                    start,
                    end,
                    text: &self.text[start..end],
                };
                if !self.excluded(&token) {
                    return Some(token);
                }
                continue;
            }
            if bytes[self.pos].is_ascii_digit() {
                let start = self.pos;
                let mut end = start + 1;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                self.pos = end;
                let token = Token {
                    start,
                    end,
                    text: &self.text[start..end],
                };
                if !self.excluded(&token) {
                    return Some(token);
                }
                continue;
            }
            self.pos += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&str> {
        let config = AnnotatorConfig::default();
        Scanner::new(text, &config).map(|t| t.text).collect()
    }

    #[test]
    fn finds_maximal_digit_runs() {
        assert_eq!(tokens("sold 450 of 1234567 units"), ["450", "1234567"]);
    }

    #[test]
    fn no_digits_no_tokens() {
        assert!(tokens("no numbers here").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn exception_literal_is_one_token() {
        assert_eq!(tokens("under 10b5-1 plan"), ["10b5-1"]);
    }

    #[test]
    fn reference_prefix_skips_the_whole_run() {
        // not "0" left over from re-entering the run one digit later
        assert!(tokens("see Form 10 filed").is_empty());
        assert!(tokens("Rule 144 says").is_empty());
        assert!(tokens("Article 9 applies").is_empty());
    }

    #[test]
    fn reference_prefix_is_case_sensitive() {
        assert_eq!(tokens("form 10"), ["10"]);
    }

    #[test]
    fn reference_prefix_needs_exactly_one_space() {
        assert_eq!(tokens("Form  10"), ["10"]);
        assert_eq!(tokens("Form10"), ["10"]);
    }

    #[test]
    fn year_prefix_excludes_the_following_number() {
        assert_eq!(tokens("2019 450"), ["2019"]);
    }

    #[test]
    fn trailing_year_excludes_the_preceding_number() {
        // "31" is gone at this stage; "2012" survives to classification,
        // where the year range suppresses it
        assert_eq!(tokens("December 31, 2012"), ["2012"]);
        assert_eq!(tokens("December 31, 2020"), ["31", "2020"]);
    }

    #[test]
    fn trailing_year_matches_without_comma() {
        assert_eq!(tokens("31 2012"), ["2012"]);
        assert_eq!(tokens("31x2012"), ["31", "2012"]);
    }

    #[test]
    fn trailing_year_is_a_prefix_match() {
        // the year only needs to lead the following run
        assert_eq!(tokens("31 20125"), ["20125"]);
    }

    #[test]
    fn rule_prefixed_exception_is_excluded() {
        assert!(tokens("Rule 10b5-1 plan").is_empty());
    }

    #[test]
    fn offsets_are_byte_positions() {
        let config = AnnotatorConfig::default();
        let text = "café 42 bar";
        let token = Scanner::new(text, &config).next().unwrap();
        assert_eq!(&text[token.start..token.end], "42");
    }
}
