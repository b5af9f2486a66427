use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single entry extracted from an awesome list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Opaque identifier, unique within one parse run (`res-{n}`).
    pub id: String,
    /// Plain-text title with markdown formatting stripped.
    pub title: String,
    /// Primary hyperlink target. Never empty and never an in-page anchor.
    pub url: String,
    /// Free text following the title link, whitespace-normalized.
    pub description: String,
    /// Nearest enclosing second-level heading in the main content region.
    pub category: String,
    /// Nearest enclosing third-level heading, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// At most one origin tag (`GitHub`/`GitLab`/`Bitbucket`) followed by
    /// the subcategory name, when present.
    pub tags: Vec<String>,
    /// License token from a trailing inline-code span (e.g. `MIT`, `GPL-3.0`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Language or platform label from a trailing inline-code span.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Href of a secondary link labeled "Source Code".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
    /// Href of a secondary link labeled "Demo".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Resource {
        Resource {
            id: "res-1".to_string(),
            title: "FFmpeg".to_string(),
            url: "https://github.com/FFmpeg/FFmpeg".to_string(),
            description: "A complete solution to record and convert media".to_string(),
            category: "Encoding".to_string(),
            subcategory: Some("Tools".to_string()),
            tags: vec!["GitHub".to_string(), "Tools".to_string()],
            license: Some("LGPL-2.1".to_string()),
            language: Some("C".to_string()),
            source_code: None,
            demo: None,
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let resource = sample();
        let json = serde_json::to_string(&resource).unwrap();
        let deserialized: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, resource);
    }

    #[test]
    fn multi_word_fields_serialize_in_camel_case() {
        let mut resource = sample();
        resource.source_code = Some("https://github.com/FFmpeg/FFmpeg".to_string());
        let json = serde_json::to_string(&resource).unwrap();
        assert!(json.contains("\"sourceCode\""));
        assert!(!json.contains("source_code"));
    }

    #[test]
    fn absent_metadata_is_omitted() {
        let mut resource = sample();
        resource.license = None;
        resource.language = None;
        let json = serde_json::to_string(&resource).unwrap();
        assert!(!json.contains("license"));
        assert!(!json.contains("language"));
        assert!(!json.contains("demo"));
    }
}
