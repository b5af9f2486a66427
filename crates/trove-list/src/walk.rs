//! Single-pass walker over the markdown event stream.
//!
//! Headings drive a small state machine that tracks the current category and
//! subcategory; list items are handed to the extractor only while that state
//! says we are inside real content. Boilerplate sections (table of contents,
//! contributing, license, credits, external links, anti-features) never
//! contribute resources.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};
use trove_core::{Resource, ids};

use crate::item::{self, Fragment};
use crate::text;

/// Headings whose sections are never parsed for resources (case-insensitive
/// substring match).
const EXCLUDED_SECTIONS: &[&str] = &[
    "contributing",
    "license",
    "external",
    "anti-features",
    "credits",
];

/// Heading-driven walker state.
#[derive(Debug)]
pub(crate) struct WalkerState {
    category: Option<String>,
    subcategory: Option<String>,
    inside_main_content: bool,
    skip_contents_section: bool,
}

impl WalkerState {
    /// Documents with a table-of-contents heading only start collecting after
    /// it; documents without one are all main content from the first line.
    pub(crate) fn new(has_contents_heading: bool) -> Self {
        Self {
            category: None,
            subcategory: None,
            inside_main_content: !has_contents_heading,
            skip_contents_section: false,
        }
    }

    /// Apply one heading to the state machine. Rules are ordered; the first
    /// matching rule wins. Headings with no text leave the state untouched.
    pub(crate) fn on_heading(&mut self, depth: u8, heading: &str) {
        if heading.is_empty() {
            return;
        }
        let lowered = heading.to_lowercase();
        if EXCLUDED_SECTIONS
            .iter()
            .any(|section| lowered.contains(section))
        {
            self.category = None;
            self.subcategory = None;
        } else if lowered.contains("contents") {
            self.inside_main_content = true;
            self.skip_contents_section = true;
            self.category = None;
            self.subcategory = None;
        } else if depth == 2 && self.inside_main_content {
            self.category = Some(heading.to_string());
            self.subcategory = None;
            self.skip_contents_section = false;
        } else if depth == 3 && self.category.is_some() {
            self.subcategory = Some(heading.to_string());
        }
    }

    /// Lists count only inside a category, and never between the
    /// table-of-contents heading and the first category heading.
    pub(crate) fn collecting(&self) -> bool {
        self.category.is_some() && !self.skip_contents_section
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }
}

/// Everything the assembler needs from one pass over the document.
#[derive(Debug, Default)]
pub(crate) struct DocumentOutline {
    pub(crate) title: Option<String>,
    pub(crate) paragraphs: Vec<String>,
    pub(crate) resources: Vec<Resource>,
}

/// Walk the document once, in document order.
pub(crate) fn walk_document(markdown: &str) -> DocumentOutline {
    let events: Vec<Event<'_>> = Parser::new(markdown).collect();
    let mut state = WalkerState::new(has_contents_heading(&events));

    let mut outline = DocumentOutline::default();
    let mut heading: Option<(u8, String)> = None;
    let mut paragraph: Option<String> = None;
    let mut item_fragments: Option<Vec<Fragment>> = None;
    let mut link: Option<(String, String)> = None;
    let mut list_depth = 0usize;
    let mut in_code_block = false;
    let mut next_id = 1usize;

    for event in &events {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                // A heading inside a list item ends the item's own text.
                if let Some(fragments) = item_fragments.take() {
                    emit_item(&fragments, &state, &mut next_id, &mut outline.resources);
                }
                heading = Some((heading_depth(*level), String::new()));
            }
            Event::End(Tag::Heading(..)) => {
                if let Some((depth, raw)) = heading.take() {
                    let text = text::clean_markdown(&raw);
                    if depth == 1
                        && outline.title.is_none()
                        && text.to_lowercase().contains("awesome")
                    {
                        outline.title = Some(text.clone());
                    }
                    state.on_heading(depth, &text);
                }
            }
            Event::Start(Tag::Paragraph) if list_depth == 0 => {
                paragraph = Some(String::new());
            }
            Event::End(Tag::Paragraph) => {
                if let Some(text) = paragraph.take() {
                    outline.paragraphs.push(text);
                }
            }
            Event::Start(Tag::List(_)) => {
                // A nested list ends the enclosing item's own text.
                if let Some(fragments) = item_fragments.take() {
                    emit_item(&fragments, &state, &mut next_id, &mut outline.resources);
                }
                list_depth += 1;
            }
            Event::End(Tag::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
            }
            Event::Start(Tag::Item) => {
                item_fragments = Some(Vec::new());
            }
            Event::End(Tag::Item) => {
                if let Some(fragments) = item_fragments.take() {
                    emit_item(&fragments, &state, &mut next_id, &mut outline.resources);
                }
            }
            Event::Start(Tag::Link(_, dest, _)) if item_fragments.is_some() => {
                link = Some((dest.to_string(), String::new()));
            }
            Event::End(Tag::Link(..)) => {
                if let Some((url, label)) = link.take() {
                    if let Some(fragments) = item_fragments.as_mut() {
                        fragments.push(Fragment::Link { label, url });
                    }
                }
            }
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(Tag::CodeBlock(_)) => in_code_block = false,
            Event::Text(t) if !in_code_block => {
                if let Some((_, label)) = link.as_mut() {
                    label.push_str(t);
                } else if let Some(fragments) = item_fragments.as_mut() {
                    fragments.push(Fragment::Text(t.to_string()));
                } else if let Some((_, raw)) = heading.as_mut() {
                    raw.push_str(t);
                } else if let Some(text) = paragraph.as_mut() {
                    text.push_str(t);
                }
            }
            Event::Code(code) => {
                if let Some((_, label)) = link.as_mut() {
                    label.push_str(code);
                } else if let Some(fragments) = item_fragments.as_mut() {
                    fragments.push(Fragment::Code(code.to_string()));
                } else if let Some((_, raw)) = heading.as_mut() {
                    raw.push_str(code);
                } else if let Some(text) = paragraph.as_mut() {
                    text.push_str(code);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, label)) = link.as_mut() {
                    label.push(' ');
                } else if let Some(fragments) = item_fragments.as_mut() {
                    fragments.push(Fragment::Text(" ".to_string()));
                } else if let Some((_, raw)) = heading.as_mut() {
                    raw.push(' ');
                } else if let Some(text) = paragraph.as_mut() {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    outline
}

/// Ids are sequential over successfully extracted resources; skipped items
/// do not consume one.
fn emit_item(
    fragments: &[Fragment],
    state: &WalkerState,
    next_id: &mut usize,
    resources: &mut Vec<Resource>,
) {
    if !state.collecting() {
        return;
    }
    let Some(category) = state.category() else {
        return;
    };
    let id = ids::resource_id(*next_id);
    if let Some(resource) = item::extract_resource(fragments, id, category, state.subcategory()) {
        resources.push(resource);
        *next_id += 1;
    }
}

/// Pre-scan for a heading mentioning "contents" anywhere in the document.
fn has_contents_heading(events: &[Event<'_>]) -> bool {
    let mut heading: Option<String> = None;
    for event in events {
        match event {
            Event::Start(Tag::Heading(..)) => heading = Some(String::new()),
            Event::End(Tag::Heading(..)) => {
                if let Some(text) = heading.take() {
                    if text.to_lowercase().contains("contents") {
                        return true;
                    }
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some(text) = heading.as_mut() {
                    text.push_str(t);
                }
            }
            _ => {}
        }
    }
    false
}

const fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
