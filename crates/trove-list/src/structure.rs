//! Structural pre-checks before the full tree walk.
//!
//! A document with no section headings or no bullet links can never yield
//! resources, so those fail fast here. Everything else is advisory: short
//! content and low link counts are logged as warnings and parsing proceeds.

use std::fmt;

use trove_config::ValidationConfig;

use crate::error::ListError;

/// Advisory findings from the pre-check. Logged, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StructureWarning {
    ShortContent { len: usize, min: usize },
    FewLinks { count: usize, min: usize },
}

impl fmt::Display for StructureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortContent { len, min } => {
                write!(f, "content is only {len} characters (expected at least {min})")
            }
            Self::FewLinks { count, min } => {
                write!(f, "only {count} link list items found (expected at least {min})")
            }
        }
    }
}

/// Verify the minimum shape of an awesome list.
///
/// # Errors
///
/// Returns [`ListError::NoHeadings`] or [`ListError::NoListItems`] when the
/// document cannot possibly produce resources.
pub(crate) fn precheck(
    markdown: &str,
    config: &ValidationConfig,
) -> Result<Vec<StructureWarning>, ListError> {
    if !has_section_heading(markdown) {
        return Err(ListError::NoHeadings);
    }

    let links = bullet_link_count(markdown);
    if links == 0 {
        return Err(ListError::NoListItems);
    }

    let mut warnings = Vec::new();
    let len = markdown.chars().count();
    if len < config.min_content_len {
        warnings.push(StructureWarning::ShortContent {
            len,
            min: config.min_content_len,
        });
    }
    if links < config.min_link_count {
        warnings.push(StructureWarning::FewLinks {
            count: links,
            min: config.min_link_count,
        });
    }
    Ok(warnings)
}

/// A line opening a second- or third-level ATX heading.
fn has_section_heading(markdown: &str) -> bool {
    markdown.lines().any(|line| {
        let t = line.trim_start();
        t.starts_with("## ") || t.starts_with("### ")
    })
}

/// Count lines shaped like `- [label](url)` bullet links.
fn bullet_link_count(markdown: &str) -> usize {
    markdown
        .lines()
        .filter(|line| {
            let t = line.trim_start();
            (t.starts_with("- [") || t.starts_with("* [") || t.starts_with("+ ["))
                && t.contains("](")
        })
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> ValidationConfig {
        ValidationConfig::default()
    }

    #[test]
    fn plain_text_fails_with_no_headings() {
        let err = precheck("Just some text without any structure", &config()).unwrap_err();
        assert!(matches!(err, ListError::NoHeadings));
    }

    #[test]
    fn heading_without_bullets_fails_with_no_list_items() {
        let err = precheck("## Category\n\nSome text but no list items", &config()).unwrap_err();
        assert!(matches!(err, ListError::NoListItems));
    }

    #[test]
    fn minimal_list_passes_with_warnings() {
        let markdown = "## Tools\n\n- [FFmpeg](https://github.com/FFmpeg/FFmpeg) - Media toolkit\n";
        let warnings = precheck(markdown, &config()).unwrap();
        assert_eq!(
            warnings,
            vec![
                StructureWarning::ShortContent {
                    len: markdown.chars().count(),
                    min: 500
                },
                StructureWarning::FewLinks { count: 1, min: 5 },
            ]
        );
    }

    #[test]
    fn long_document_with_enough_links_has_no_warnings() {
        let mut markdown = String::from("## Tools\n\n");
        for i in 0..6 {
            markdown.push_str(&format!(
                "- [Tool {i}](https://github.com/user/tool{i}) - A very useful tool for processing\n"
            ));
        }
        markdown.push_str(&"filler text ".repeat(40));
        let warnings = precheck(&markdown, &config()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn asterisk_bullets_count_as_links() {
        let markdown = "### Sub\n\n* [A](https://a.example) - one\n* [B](https://b.example) - two\n";
        assert!(precheck(markdown, &config()).is_ok());
    }

    #[test]
    fn thresholds_follow_configuration() {
        let markdown = "## T\n\n- [A](https://a.example) - one\n";
        let relaxed = ValidationConfig {
            min_content_len: 10,
            min_link_count: 1,
            ..ValidationConfig::default()
        };
        assert!(precheck(markdown, &relaxed).unwrap().is_empty());
    }
}
