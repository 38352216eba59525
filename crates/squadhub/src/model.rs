//! Core record types for squadhub.
//!
//! These are the read-only records the page is built from: resources,
//! projects and release notes. They are loaded once and never mutated.

use serde::{Deserialize, Serialize};

/// A link to a squadron resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Display title.
    pub title: String,
    /// Link target.
    pub url: String,
    /// Short description.
    pub desc: String,
    /// Tags, first one is the primary tag.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the link leaves the site (opens in a new tab).
    #[serde(default)]
    pub ext: bool,
}

impl Resource {
    /// The tag used for the colored label, `General` when the first tag is
    /// missing or blank.
    #[must_use]
    pub fn primary_tag(&self) -> &str {
        self.tags
            .first()
            .filter(|t| !t.is_empty())
            .map_or("General", String::as_str)
    }

    /// Whether this resource carries the given tag (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Lifecycle status of a project.
///
/// Unrecognized codes are kept verbatim so they can be shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    /// Not started yet.
    Planning,
    /// Work underway.
    InProgress,
    /// Done.
    Completed,
    /// Any other status code.
    Other(String),
}

impl ProjectStatus {
    /// The raw status code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for ProjectStatus {
    fn from(code: &str) -> Self {
        match code {
            "planning" => Self::Planning,
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "planning" | "in-progress" | "completed" => Self::from(code.as_str()),
            _ => Self::Other(code),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(raw) => raw,
            known => known.code().to_string(),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A squadron project with a progress indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Current status.
    pub status: ProjectStatus,
    /// Completion percentage, expected in `0..=100`.
    pub progress: i32,
    /// Due date as `YYYY-MM-DD`.
    pub due: String,
}

/// An entry in the release notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNote {
    /// Version string, rendered with a `v` prefix.
    #[serde(rename = "v")]
    pub version: String,
    /// Release date as `YYYY-MM-DD`.
    pub date: String,
    /// Short badge label.
    pub label: String,
    /// Headline.
    pub title: String,
    /// Bullet points, in order.
    #[serde(default)]
    pub bullets: Vec<String>,
}
