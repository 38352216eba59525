//! View models.
//!
//! Pure mappings from records to display-ready values. Text here is still
//! raw; escaping happens when the view model is embedded in markup.

use serde::Serialize;

use crate::format::{format_date, status_class, status_label, DateStyle};
use crate::model::{Project, ProjectStatus, ReleaseNote, Resource};
use crate::palette::TagPalette;

/// Settings that influence view-model construction.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    /// Badge colors for primary tags.
    pub palette: TagPalette,
    /// Token order for dates.
    pub date_style: DateStyle,
}

/// How a resource link navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// New tab, without access to the opener.
    NewTab,
    /// Same tab.
    InPlace,
}

/// Display form of a resource card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceCard {
    /// Primary tag label.
    pub tag: String,
    /// Badge background.
    pub tag_background: String,
    /// Badge text color.
    pub tag_foreground: String,
    /// All tags, comma-joined.
    pub tags: String,
    /// Title.
    pub title: String,
    /// Description.
    pub desc: String,
    /// Link target URL, also the value copied to the clipboard.
    pub url: String,
    /// Navigation mode.
    pub target: LinkTarget,
}

impl ResourceCard {
    /// Build the card for `resource`.
    #[must_use]
    pub fn from_resource(resource: &Resource, ctx: &ViewContext) -> Self {
        let tag = resource.primary_tag();
        let badge = ctx.palette.badge(tag);
        Self {
            tag: tag.to_string(),
            tag_background: badge.background.to_string(),
            tag_foreground: badge.foreground.to_string(),
            tags: resource.tags.join(","),
            title: resource.title.clone(),
            desc: resource.desc.clone(),
            url: resource.url.clone(),
            target: if resource.ext {
                LinkTarget::NewTab
            } else {
                LinkTarget::InPlace
            },
        }
    }
}

/// Icon shown next to a project status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    /// Checkmark.
    Check,
    /// Half-filled clock.
    Clock,
    /// Exclamation in a circle.
    Alert,
}

impl StatusIcon {
    /// Icon for `status`; anything not completed or in progress gets the alert.
    #[must_use]
    pub fn for_status(status: &ProjectStatus) -> Self {
        match status {
            ProjectStatus::Completed => Self::Check,
            ProjectStatus::InProgress => Self::Clock,
            ProjectStatus::Planning | ProjectStatus::Other(_) => Self::Alert,
        }
    }
}

/// Display form of a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Status class, empty for unrecognized statuses.
    pub status_class: String,
    /// Status label.
    pub status_label: String,
    /// Status icon.
    pub icon: StatusIcon,
    /// Formatted due date.
    pub due: String,
    /// Bar fill, used verbatim as a percentage width.
    pub progress: i32,
}

impl ProjectCard {
    /// Build the card for `project`.
    #[must_use]
    pub fn from_project(project: &Project, ctx: &ViewContext) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            status_class: status_class(&project.status).to_string(),
            status_label: status_label(&project.status).to_string(),
            icon: StatusIcon::for_status(&project.status),
            due: format_date(&project.due, ctx.date_style),
            progress: project.progress,
        }
    }
}

/// Display form of a release note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    /// Version, without the `v` prefix.
    pub version: String,
    /// Badge label.
    pub label: String,
    /// Raw ISO date, for the machine-readable attribute.
    pub datetime: String,
    /// Formatted date.
    pub date: String,
    /// Headline.
    pub title: String,
    /// Bullet points.
    pub bullets: Vec<String>,
}

impl NoteEntry {
    /// Build the entry for `note`.
    #[must_use]
    pub fn from_note(note: &ReleaseNote, ctx: &ViewContext) -> Self {
        Self {
            version: note.version.clone(),
            label: note.label.clone(),
            datetime: note.date.clone(),
            date: format_date(&note.date, ctx.date_style),
            title: note.title.clone(),
            bullets: note.bullets.clone(),
        }
    }
}
