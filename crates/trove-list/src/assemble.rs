//! Builds the final [`AwesomeList`] from a walked document.

use trove_config::ValidationConfig;
use trove_core::AwesomeList;

use crate::walk::DocumentOutline;
use crate::{text, url};

const FALLBACK_TITLE: &str = "Awesome List";

/// Keywords that mark a preamble paragraph as badge/status noise rather than
/// a real description. Matched case-sensitively: "Awesome" catches the badge
/// label without rejecting ordinary prose that merely says "awesome".
const BADGE_MARKERS: &[&str] = &[
    "badge",
    "build",
    "Build Status",
    "Awesome",
    "Slack",
    "Netlify",
    "Track Awesome",
    "Last Commit",
];

pub(crate) fn assemble(
    outline: DocumentOutline,
    source_url: &str,
    config: &ValidationConfig,
) -> AwesomeList {
    let title = outline.title.unwrap_or_else(|| FALLBACK_TITLE.to_string());
    let description = choose_description(&outline.paragraphs, &title, config);
    AwesomeList {
        title,
        description,
        repo_url: url::derive_repo_url(source_url),
        resources: outline.resources,
    }
}

/// First preamble paragraph that reads like a description; otherwise a
/// template derived from the title.
fn choose_description(paragraphs: &[String], title: &str, config: &ValidationConfig) -> String {
    paragraphs
        .iter()
        .map(|paragraph| text::clean_markdown(paragraph))
        .find(|cleaned| {
            !cleaned.is_empty()
                && !BADGE_MARKERS.iter().any(|marker| cleaned.contains(marker))
                && cleaned.chars().count() > config.min_description_len
        })
        .unwrap_or_else(|| default_description(title))
}

fn default_description(title: &str) -> String {
    let topic = topic_from_title(title);
    match topic.to_lowercase().as_str() {
        "go" | "golang" => {
            "A curated list of awesome Go frameworks, libraries and software".to_string()
        }
        "python" => {
            "A curated list of awesome Python frameworks, libraries, software and resources"
                .to_string()
        }
        "javascript" | "js" => {
            "A collection of awesome browser-side JavaScript libraries, resources and shiny things"
                .to_string()
        }
        "react" => "A collection of awesome things regarding the React ecosystem".to_string(),
        "vue" | "vue.js" => "A curated list of awesome things related to Vue.js".to_string(),
        "node" | "node.js" | "nodejs" => "Delightful Node.js packages and resources".to_string(),
        "" | "list" => "A curated list of awesome resources".to_string(),
        _ => format!("A curated list of awesome {topic} frameworks, libraries and software"),
    }
}

/// Strip one leading "awesome" token from the title. The token must stand
/// alone: "Awesomeness" keeps its prefix.
fn topic_from_title(title: &str) -> &str {
    let trimmed = title.trim();
    let Some(prefix) = trimmed.get(..7) else {
        return trimmed;
    };
    if !prefix.eq_ignore_ascii_case("awesome") {
        return trimmed;
    }
    let tail = &trimmed[7..];
    if !(tail.is_empty() || tail.starts_with([' ', '-', ':'])) {
        return trimmed;
    }
    tail.trim_start_matches([' ', '-', ':'])
}
