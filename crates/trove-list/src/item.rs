//! List-item fragment model and resource extraction.
//!
//! The walker accumulates each list item's inline content as ordered
//! fragments, so extraction can find the primary link, the trailing
//! description, and metadata spans without re-parsing the item text.

use trove_core::Resource;

use crate::{meta, tags, text};

/// Inline content of one list item, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fragment {
    Text(String),
    Code(String),
    Link { label: String, url: String },
}

/// Flatten fragments to plain text: links collapse to their labels, code
/// spans to their content.
pub(crate) fn flatten(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text(t) => out.push_str(t),
            Fragment::Code(c) => out.push_str(c),
            Fragment::Link { label, .. } => out.push_str(label),
        }
    }
    out
}

/// Convert one accumulated list item into a [`Resource`].
///
/// Returns `None` for navigation artifacts ("back to top" links, `#...`
/// anchor targets, text starting with `#`) and for items without a usable
/// primary link.
pub(crate) fn extract_resource(
    fragments: &[Fragment],
    id: String,
    category: &str,
    subcategory: Option<&str>,
) -> Option<Resource> {
    let flat = flatten(fragments);
    if flat.trim_start().starts_with('#') {
        return None;
    }
    if flat.to_lowercase().contains("back to top") {
        return None;
    }

    let (label, url, primary) = fragments.iter().enumerate().find_map(|(idx, f)| match f {
        Fragment::Link { label, url } => Some((label, url, idx)),
        _ => None,
    })?;
    if url.is_empty() || url.starts_with('#') {
        return None;
    }

    let title = text::clean_markdown(label);
    if title.is_empty() {
        return None;
    }

    let trailing = flatten(&fragments[primary + 1..]);
    let description = text::clean_markdown(
        trailing.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '—' | ':')),
    );

    let item_meta = meta::extract(fragments);

    Some(Resource {
        id,
        title,
        url: url.clone(),
        description,
        category: category.to_string(),
        subcategory: subcategory.map(str::to_string),
        tags: tags::synthesize(url, subcategory),
        license: item_meta.license,
        language: item_meta.language,
        source_code: item_meta.source_code,
        demo: item_meta.demo,
    })
}
