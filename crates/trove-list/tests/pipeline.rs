//! End-to-end parses of fixed markdown documents, from raw text to
//! [`trove_core::AwesomeList`].

use pretty_assertions::assert_eq;
use trove_config::{TroveConfig, ValidationConfig};
use trove_core::AwesomeList;
use trove_list::{ListError, parse_document};

const SOURCE_URL: &str = "https://raw.githubusercontent.com/example/awesome-test/main/README.md";

const AWESOME_DOC: &str = r"# Awesome Test

[![Build Status](https://img.shields.io/badge/build-passing-green.svg)](https://example.com)

A curated collection of hand-picked tools and libraries for testing.

## Contents

- [Web Development](#web-development)
- [Databases](#databases)

## Web Development

### Frontend Frameworks

- [React](https://github.com/facebook/react) - A JavaScript library for building user interfaces `JavaScript` `MIT`
- [Vue](https://github.com/vuejs/vue) - The progressive framework. [Source Code](https://github.com/vuejs/core) [Demo](https://vuejs.org)

### Backend Frameworks

- [Express](https://github.com/expressjs/express) - Fast, unopinionated web framework
- [Back to top](#contents)

## Databases

- [PostgreSQL](https://gitlab.com/postgres/postgres) - The world's most advanced open source database
- [#](#anchor-only)

## Contributing

- [Guidelines](https://github.com/example/guidelines) - Please read first.

## License

- [CC0](https://creativecommons.org/publicdomain/zero/1.0/)
";

fn parse(markdown: &str) -> Result<AwesomeList, ListError> {
    parse_document(markdown, SOURCE_URL, &ValidationConfig::default())
}

#[test]
fn full_document_parses_into_ordered_resources() {
    let list = parse(AWESOME_DOC).unwrap();

    assert_eq!(list.title, "Awesome Test");
    assert_eq!(
        list.description,
        "A curated collection of hand-picked tools and libraries for testing."
    );
    assert_eq!(list.repo_url, "https://github.com/example/awesome-test");

    let titles: Vec<&str> = list.resources.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["React", "Vue", "Express", "PostgreSQL"]);

    let react = &list.resources[0];
    assert_eq!(react.url, "https://github.com/facebook/react");
    assert_eq!(
        react.description,
        "A JavaScript library for building user interfaces JavaScript MIT"
    );
    assert_eq!(react.category, "Web Development");
    assert_eq!(react.subcategory.as_deref(), Some("Frontend Frameworks"));
    assert_eq!(react.tags, vec!["GitHub", "Frontend Frameworks"]);
    assert_eq!(react.license.as_deref(), Some("MIT"));
    assert_eq!(react.language.as_deref(), Some("JavaScript"));

    let vue = &list.resources[1];
    assert_eq!(vue.source_code.as_deref(), Some("https://github.com/vuejs/core"));
    assert_eq!(vue.demo.as_deref(), Some("https://vuejs.org"));

    let express = &list.resources[2];
    assert_eq!(express.category, "Web Development");
    assert_eq!(express.subcategory.as_deref(), Some("Backend Frameworks"));

    let postgres = &list.resources[3];
    assert_eq!(postgres.category, "Databases");
    assert_eq!(postgres.subcategory, None);
    assert_eq!(postgres.tags, vec!["GitLab"]);
}

#[test]
fn ids_are_unique_and_sequential_within_one_run() {
    let list = parse(AWESOME_DOC).unwrap();
    let ids: Vec<&str> = list.resources.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["res-1", "res-2", "res-3", "res-4"]);
}

#[test]
fn hierarchy_assignment_matches_heading_depths() {
    let markdown = "\
# Awesome Test
Description here.
## Web Development
### Frontend Frameworks
- [React](https://github.com/facebook/react) - A JavaScript library
### Backend Frameworks
- [Express](https://github.com/expressjs/express) - Fast web framework
";
    let list = parse(markdown).unwrap();

    assert_eq!(list.resources.len(), 2);
    assert_eq!(list.resources[0].category, "Web Development");
    assert_eq!(
        list.resources[0].subcategory.as_deref(),
        Some("Frontend Frameworks")
    );
    assert_eq!(list.resources[1].category, "Web Development");
    assert_eq!(
        list.resources[1].subcategory.as_deref(),
        Some("Backend Frameworks")
    );
}

#[test]
fn unstructured_text_fails_with_no_headings() {
    let err = parse("Just some text without any structure").unwrap_err();
    assert!(matches!(err, ListError::NoHeadings));
}

#[test]
fn headings_without_bullets_fail_with_no_list_items() {
    let err = parse("## Category\n\nSome text but no list items").unwrap_err();
    assert!(matches!(err, ListError::NoListItems));
}

#[test]
fn excluded_only_documents_fail_with_no_resources() {
    let markdown = "\
# My List

## Contributing

- [Guidelines](https://github.com/example/guidelines) - Please read first.
";
    let err = parse(markdown).unwrap_err();
    assert!(matches!(err, ListError::NoResources));
}

#[test]
fn parsing_twice_yields_identical_results() {
    let first = parse(AWESOME_DOC).unwrap();
    let second = parse(AWESOME_DOC).unwrap();
    assert_eq!(first, second);
}

#[test]
fn go_document_without_preamble_gets_topic_description() {
    let markdown = "\
# Awesome Go

## Web Frameworks

- [Gin](https://github.com/gin-gonic/gin) - HTTP web framework.
";
    let list = parse(markdown).unwrap();

    assert_eq!(list.title, "Awesome Go");
    assert_eq!(
        list.description,
        "A curated list of awesome Go frameworks, libraries and software"
    );
}

#[test]
fn tags_carry_origin_then_subcategory() {
    let markdown = "\
# Awesome Web

## Languages

### JavaScript

- [React](https://github.com/facebook/react) - A library for interfaces.
";
    let list = parse(markdown).unwrap();

    assert_eq!(list.resources.len(), 1);
    assert_eq!(list.resources[0].tags, vec!["GitHub", "JavaScript"]);
}

#[test]
fn metadata_spans_fill_license_and_language() {
    let markdown = "\
# Awesome Tools

## Utilities

- [Resource](https://github.com/user/repo) - Description `Python` `MIT`
";
    let list = parse(markdown).unwrap();

    let resource = &list.resources[0];
    assert_eq!(resource.language.as_deref(), Some("Python"));
    assert_eq!(resource.license.as_deref(), Some("MIT"));
}

#[tokio::test]
async fn unsupported_hosts_are_rejected_before_any_request() {
    let config = TroveConfig::default();

    // example.invalid never resolves; reaching the network would surface as
    // a transport error rather than a validation one.
    let err = trove_list::fetch_awesome_list("https://example.invalid/list.md", &config)
        .await
        .unwrap_err();

    assert!(matches!(err, ListError::UnsupportedHost { .. }));
}

#[tokio::test]
#[ignore] // requires network
async fn live_fetch_parses_a_real_awesome_list() {
    let config = TroveConfig::default();
    let list = trove_list::fetch_awesome_list(
        "https://raw.githubusercontent.com/avelino/awesome-go/main/README.md",
        &config,
    )
    .await
    .unwrap();

    assert!(!list.resources.is_empty());
    assert_eq!(list.repo_url, "https://github.com/avelino/awesome-go");
}
