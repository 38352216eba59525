//! List filtering.
//!
//! Each list keeps its own [`FilterState`]. Filtering is a stable projection
//! of the static records through that state: order is preserved and the same
//! inputs always produce the same subsequence.

use serde::{Deserialize, Serialize};

use crate::model::{Project, Resource};

/// Chip value meaning "no restriction".
pub const ALL: &str = "all";

/// Category or status restriction chosen with a chip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    /// Everything passes.
    #[default]
    All,
    /// Only records carrying this exact value.
    Only(String),
}

impl Selection {
    /// The chip value for this selection.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(v) => v,
        }
    }

    /// Whether `candidate` passes this selection.
    #[must_use]
    pub fn admits(&self, candidate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => v == candidate,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL.to_string(),
            Selection::Only(v) => v,
        }
    }
}

/// Per-list filter state: free-text query plus chip selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Raw text from the search box.
    pub query: String,
    /// Active chip.
    pub selection: Selection,
}

impl FilterState {
    /// Build a state from a query and a chip value.
    #[must_use]
    pub fn new(query: impl Into<String>, selection: impl Into<Selection>) -> Self {
        Self {
            query: query.into(),
            selection: selection.into(),
        }
    }

    /// The query trimmed and lower-cased, `None` when blank.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        let q = self.query.trim();
        if q.is_empty() {
            None
        } else {
            Some(q.to_lowercase())
        }
    }

    /// Whether the state admits everything.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.selection == Selection::All && self.needle().is_none()
    }
}

/// Distinct tags across `resources`, in first-seen order.
#[must_use]
pub fn distinct_tags(resources: &[Resource]) -> Vec<&str> {
    let mut tags: Vec<&str> = Vec::new();
    for tag in resources.iter().flat_map(|r| r.tags.iter()) {
        if !tags.contains(&tag.as_str()) {
            tags.push(tag);
        }
    }
    tags
}

/// Whether `needle` occurs in the space-joined, lower-cased `fields`.
fn haystack_contains<'a>(fields: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    let hay = fields.into_iter().collect::<Vec<_>>().join(" ").to_lowercase();
    hay.contains(needle)
}

/// Resources matching `state`, in original order.
///
/// A resource passes when the selection is `all` or one of its tags equals
/// the selection, and the query is blank or occurs in its title,
/// description, URL or tags.
#[must_use]
pub fn filter_resources<'a>(resources: &'a [Resource], state: &FilterState) -> Vec<&'a Resource> {
    let needle = state.needle();
    resources
        .iter()
        .filter(|r| match &state.selection {
            Selection::All => true,
            Selection::Only(tag) => r.has_tag(tag),
        })
        .filter(|r| {
            needle.as_deref().map_or(true, |n| {
                let fields = [r.title.as_str(), r.desc.as_str(), r.url.as_str()]
                    .into_iter()
                    .chain(r.tags.iter().map(String::as_str));
                haystack_contains(fields, n)
            })
        })
        .collect()
}

/// Projects matching `state`, in original order.
///
/// The selection must equal the raw status code (or be `all`); the query is
/// matched against title and description only.
#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    let needle = state.needle();
    projects
        .iter()
        .filter(|p| state.selection.admits(p.status.code()))
        .filter(|p| {
            needle.as_deref().map_or(true, |n| {
                haystack_contains([p.title.as_str(), p.description.as_str()], n)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::model::ProjectStatus;

    fn resource(title: &str, url: &str, tags: &[&str]) -> Resource {
        Resource {
            title: title.to_string(),
            url: url.to_string(),
            desc: format!("About {title}"),
            tags: tags.iter().map(ToString::to_string).collect(),
            ext: false,
        }
    }

    fn project(title: &str, status: &str) -> Project {
        Project {
            title: title.to_string(),
            description: format!("{title} description"),
            status: ProjectStatus::from(status),
            progress: 50,
            due: "2025-11-12".to_string(),
        }
    }

    fn sample_resources() -> Vec<Resource> {
        vec![
            resource("Drill Manual", "https://drill.example", &["Official", "Drill"]),
            resource("Radio Handbook", "https://radio.example", &["Flight"]),
            resource("Bake Sale", "https://community.example", &["Community"]),
            resource("Untagged", "https://misc.example", &[]),
        ]
    }

    fn titles<'a>(items: impl IntoIterator<Item = &'a Resource>) -> Vec<&'a str> {
        items.into_iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_selection_from_all() {
        assert_eq!(Selection::from("all"), Selection::All);
        assert_eq!(Selection::from("Flight"), Selection::Only("Flight".to_string()));
        assert_eq!(Selection::All.value(), "all");
    }

    #[test]
    fn test_needle_trims_and_lowercases() {
        let state = FilterState::new("  RaDiO  ", ALL);
        assert_eq!(state.needle().as_deref(), Some("radio"));
        assert!(FilterState::new("   ", ALL).needle().is_none());
    }

    #[test]
    fn test_unrestricted_returns_everything_in_order() {
        let resources = sample_resources();
        let state = FilterState::default();
        assert!(state.is_unrestricted());
        let out = filter_resources(&resources, &state);
        assert_eq!(out.len(), resources.len());
        assert!(out.iter().zip(&resources).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_category_filter() {
        let resources = sample_resources();
        let out = filter_resources(&resources, &FilterState::new("", "Flight"));
        assert_eq!(titles(out.iter().copied()), vec!["Radio Handbook"]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let resources = sample_resources();
        assert!(filter_resources(&resources, &FilterState::new("", "flight")).is_empty());
    }

    #[test]
    fn test_query_matches_any_field() {
        let resources = sample_resources();
        // title
        assert_eq!(
            titles(filter_resources(&resources, &FilterState::new("drill man", ALL))),
            vec!["Drill Manual"]
        );
        // url
        assert_eq!(
            titles(filter_resources(&resources, &FilterState::new("community.example", ALL))),
            vec!["Bake Sale"]
        );
        // tag
        assert_eq!(
            titles(filter_resources(&resources, &FilterState::new("OFFICIAL", ALL))),
            vec!["Drill Manual"]
        );
        // description
        assert_eq!(
            titles(filter_resources(&resources, &FilterState::new("about untagged", ALL))),
            vec!["Untagged"]
        );
    }

    #[test]
    fn test_query_and_category_combine() {
        let resources = sample_resources();
        let state = FilterState::new("radio", "Official");
        assert!(filter_resources(&resources, &state).is_empty());
    }

    #[test]
    fn test_every_result_contains_query() {
        let data = Dataset::builtin();
        for q in ["official", "NGSP", "flight", "netlify", "a", "zzz"] {
            let state = FilterState::new(q, ALL);
            let needle = q.to_lowercase();
            for r in filter_resources(&data.resources, &state) {
                let hay = format!("{} {} {} {}", r.title, r.desc, r.url, r.tags.join(" "))
                    .to_lowercase();
                assert!(hay.contains(&needle), "{} should contain {q}", r.title);
            }
        }
    }

    #[test]
    fn test_every_result_carries_category() {
        let data = Dataset::builtin();
        for tag in data.resource_tags() {
            let state = FilterState::new("", tag);
            let out = filter_resources(&data.resources, &state);
            assert!(!out.is_empty());
            assert!(out.iter().all(|r| r.has_tag(tag)));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let resources = sample_resources();
        let state = FilterState::new("example", "Official");
        assert_eq!(
            filter_resources(&resources, &state),
            filter_resources(&resources, &state)
        );
    }

    #[test]
    fn test_project_status_filter() {
        let projects = vec![
            project("Done", "completed"),
            project("Doing", "in-progress"),
            project("Later", "planning"),
        ];
        let out = filter_projects(&projects, &FilterState::new("", "planning"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Later");
    }

    #[test]
    fn test_project_completed_vs_planning_is_empty() {
        let projects = vec![project("Done", "completed")];
        assert!(filter_projects(&projects, &FilterState::new("", "planning")).is_empty());
    }

    #[test]
    fn test_project_query_ignores_status_text() {
        let projects = vec![project("Wings", "in-progress")];
        assert!(filter_projects(&projects, &FilterState::new("progress", ALL)).is_empty());
        assert_eq!(
            filter_projects(&projects, &FilterState::new("WINGS desc", ALL)).len(),
            1
        );
    }

    #[test]
    fn test_project_unknown_status_selectable() {
        let projects = vec![project("Paused", "on-hold"), project("Done", "completed")];
        let out = filter_projects(&projects, &FilterState::new("", "on-hold"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Paused");
    }

    #[test]
    fn test_filter_state_serde() {
        let state: FilterState =
            serde_json::from_str(r#"{"query":"drill","selection":"all"}"#).unwrap();
        assert_eq!(state.selection, Selection::All);
    }
}
