//! Inline span rendering for highlighted tokens

use crate::config::HighlightStyle;

/// Append `token` wrapped in the inline highlight span
pub(super) fn write_span(out: &mut String, token: &str, style: &HighlightStyle) {
    out.push_str("<span style=\"background-color: ");
    out.push_str(&style.background);
    out.push_str("; color: ");
    out.push_str(&style.color);
    out.push_str(";\">");
    out.push_str(token);
    out.push_str("</span>");
}
