//! Hosting-provider detection for tag synthesis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Code-hosting provider detected from a resource URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    GitHub,
    GitLab,
    Bitbucket,
}

impl Origin {
    /// Detect the provider by substring match. First match wins, so a URL
    /// never yields more than one origin.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        if url.contains("github.com") {
            Some(Self::GitHub)
        } else if url.contains("gitlab.com") {
            Some(Self::GitLab)
        } else if url.contains("bitbucket.org") {
            Some(Self::Bitbucket)
        } else {
            None
        }
    }

    /// The exact tag string emitted for this origin.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
            Self::Bitbucket => "Bitbucket",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn detects_each_provider() {
        assert_eq!(
            Origin::from_url("https://github.com/user/repo"),
            Some(Origin::GitHub)
        );
        assert_eq!(
            Origin::from_url("https://gitlab.com/user/repo"),
            Some(Origin::GitLab)
        );
        assert_eq!(
            Origin::from_url("https://bitbucket.org/user/repo"),
            Some(Origin::Bitbucket)
        );
    }

    #[test]
    fn unknown_host_has_no_origin() {
        assert_eq!(Origin::from_url("https://example.com/project"), None);
    }

    #[test]
    fn first_match_wins() {
        let url = "https://github.com/mirrors/gitlab.com-import";
        assert_eq!(Origin::from_url(url), Some(Origin::GitHub));
    }

    #[test]
    fn tag_strings_are_stable() {
        assert_eq!(Origin::GitHub.to_string(), "GitHub");
        assert_eq!(Origin::GitLab.to_string(), "GitLab");
        assert_eq!(Origin::Bitbucket.to_string(), "Bitbucket");
    }
}
