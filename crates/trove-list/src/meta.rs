//! License, language, and secondary-link metadata extraction.

use crate::item::Fragment;

/// Optional metadata carried by a list item. All fields are independently
/// present or absent.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ItemMeta {
    pub license: Option<String>,
    pub language: Option<String>,
    pub source_code: Option<String>,
    pub demo: Option<String>,
}

/// Scan an item's fragments for metadata.
///
/// The license is the first inline-code span shaped like a license token.
/// A language label is only reported when the item carries more than one
/// code span; the last span that is not license-shaped wins, so a trailing
/// license is never double-counted as the language.
pub(crate) fn extract(fragments: &[Fragment]) -> ItemMeta {
    let mut meta = ItemMeta::default();
    let mut code_spans: Vec<&str> = Vec::new();

    for fragment in fragments {
        match fragment {
            Fragment::Code(code) => code_spans.push(code.trim()),
            Fragment::Link { label, url } => {
                let label = label.trim();
                if meta.source_code.is_none() && label.eq_ignore_ascii_case("source code") {
                    meta.source_code = Some(url.clone());
                } else if meta.demo.is_none() && label.eq_ignore_ascii_case("demo") {
                    meta.demo = Some(url.clone());
                }
            }
            Fragment::Text(_) => {}
        }
    }

    meta.license = code_spans
        .iter()
        .find(|span| is_license_token(span))
        .map(|span| (*span).to_string());
    if code_spans.len() > 1 {
        meta.language = code_spans
            .iter()
            .rev()
            .find(|span| !span.is_empty() && !is_license_token(span))
            .map(|span| (*span).to_string());
    }

    meta
}

/// Uppercase-led license tokens: `MIT`, `CC0`, `GPL-3.0`. Anything with a
/// lowercase letter or punctuation outside `.-` is not a license.
pub(crate) fn is_license_token(span: &str) -> bool {
    span.len() >= 2
        && span.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && span
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
}
