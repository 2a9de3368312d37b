//! End-to-end behavior of the annotator over realistic description text

use numark_core::{Annotator, AnnotatorConfig};
use proptest::prelude::*;

const SPAN_OPEN: &str = "<span style=\"background-color: yellow; color: black;\">";
const SPAN_CLOSE: &str = "</span>";

fn annotate(text: &str) -> String {
    Annotator::new().annotate(text)
}

/// Remove the inserted span wrappers, leaving the original text
fn strip_spans(annotated: &str) -> String {
    annotated.replace(SPAN_OPEN, "").replace(SPAN_CLOSE, "")
}

fn span(token: &str) -> String {
    format!("{SPAN_OPEN}{token}{SPAN_CLOSE}")
}

#[test]
fn digit_free_text_is_identical() {
    for text in ["", "no digits here", "just words, punctuation; and more."] {
        assert_eq!(annotate(text), text);
    }
}

#[test]
fn form_rule_article_references_are_never_highlighted() {
    for text in [
        "see Form 10 filed",
        "per Rule 144 restrictions",
        "under Article 5 of the charter",
    ] {
        assert_eq!(annotate(text), text);
    }
}

#[test]
fn four_digit_prefix_shields_the_following_number() {
    let text = "during 2019 450 units moved";
    let annotated = annotate(text);
    // "450" is shielded by the year prefix; "2019" itself is out of range
    assert_eq!(
        annotated,
        format!("during {} 450 units moved", span("2019"))
    );
}

#[test]
fn standalone_years_in_range_are_never_highlighted() {
    assert_eq!(annotate("filed in 2015 annually"), "filed in 2015 annually");
    assert_eq!(annotate("since 1900 and 2017"), "since 1900 and 2017");
}

#[test]
fn trailing_year_lookahead_suppresses_the_day() {
    let text = "as of December 31, 2012 the balance";
    assert_eq!(annotate(text), text);
}

#[test]
fn exception_token_is_never_highlighted() {
    for text in ["under Rule 10b5-1 plan", "a 10b5-1 arrangement"] {
        assert_eq!(annotate(text), text);
    }
}

#[test]
fn qualifying_number_is_wrapped() {
    assert_eq!(
        annotate("the company sold 450 units"),
        format!("the company sold {} units", span("450"))
    );
}

#[test]
fn date_day_is_suppressed_but_later_recurrences_are_independent() {
    let annotated = annotate("January 15, 2020 report of 15 items");
    assert_eq!(
        annotated,
        format!("January 15, 2020 report of {} items", span("15"))
    );
}

#[test]
fn realistic_filing_description() {
    let text = "In 2014 the issuer repurchased 120000 shares under a Rule 10b5-1 \
                plan adopted March 4, 2013 and reported on Form 8 covering 3 programs.";
    let annotated = annotate(text);
    assert_eq!(
        annotated,
        format!(
            "In 2014 the issuer repurchased {} shares under a Rule 10b5-1 \
             plan adopted March 4, 2013 and reported on Form 8 covering {} programs.",
            span("120000"),
            span("3")
        )
    );
}

#[test]
fn annotation_is_deterministic() {
    let text = "sold 450 units in 2015, then 900 more";
    assert_eq!(annotate(text), annotate(text));
}

#[test]
fn custom_year_range_is_honored() {
    let mut config = AnnotatorConfig::default();
    config.year_range.max = 2030;
    let annotator = Annotator::with_config(config);
    assert_eq!(
        annotator.annotate("planned for 2025"),
        "planned for 2025"
    );
}

proptest! {
    #[test]
    fn output_is_never_shorter(text in "[a-zA-Z0-9 ,.-]{0,120}") {
        let annotated = annotate(&text);
        prop_assert!(annotated.len() >= text.len());
    }

    #[test]
    fn stripping_spans_reconstructs_the_input(text in "[a-zA-Z0-9 ,.-]{0,120}") {
        let annotated = annotate(&text);
        prop_assert_eq!(strip_spans(&annotated), text);
    }

    #[test]
    fn digit_free_inputs_round_trip(text in "[a-zA-Z ,.-]{0,120}") {
        prop_assert_eq!(annotate(&text), text);
    }
}
