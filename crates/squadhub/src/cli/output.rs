//! Terminal rendering of filtered lists.
//!
//! The same view models that feed the page markup, laid out as plain text,
//! JSON or a bare HTML fragment.

use std::fmt::Write as _;

use crate::error::Result;
use crate::model::{Project, ReleaseNote, Resource};
use crate::render::{render_notes, render_project_grid, render_resource_grid, NO_PROJECTS};
use crate::view::{LinkTarget, NoteEntry, ProjectCard, ResourceCard, ViewContext};

use super::OutputFormat;

/// Shown when no resource matches.
pub const NO_RESOURCES: &str = "No resources match your search.";

/// Lay out filtered resources in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn resources(matches: &[&Resource], ctx: &ViewContext, format: OutputFormat) -> Result<String> {
    let cards: Vec<ResourceCard> = matches
        .iter()
        .map(|r| ResourceCard::from_resource(r, ctx))
        .collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&cards)?),
        OutputFormat::Html => Ok(render_resource_grid(matches, ctx).markup.into_string()),
        OutputFormat::Plain => {
            if cards.is_empty() {
                return Ok(NO_RESOURCES.to_string());
            }
            let mut out = String::new();
            for card in &cards {
                let marker = match card.target {
                    LinkTarget::NewTab => " (external)",
                    LinkTarget::InPlace => "",
                };
                let _ = writeln!(out, "[{}] {}", card.tag, card.title);
                let _ = writeln!(out, "    {}{marker}", card.url);
                let _ = writeln!(out, "    {}", card.desc);
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Lay out filtered projects in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn projects(matches: &[&Project], ctx: &ViewContext, format: OutputFormat) -> Result<String> {
    let cards: Vec<ProjectCard> = matches
        .iter()
        .map(|p| ProjectCard::from_project(p, ctx))
        .collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&cards)?),
        OutputFormat::Html => Ok(render_project_grid(matches, ctx).into_string()),
        OutputFormat::Plain => {
            if cards.is_empty() {
                return Ok(NO_PROJECTS.to_string());
            }
            let mut out = String::new();
            for card in &cards {
                let _ = writeln!(out, "{} [{}]", card.title, card.status_label);
                let _ = writeln!(out, "    {}", card.description);
                let _ = writeln!(
                    out,
                    "    {} {}% | Due: {}",
                    progress_bar(card.progress),
                    card.progress,
                    card.due
                );
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Lay out release notes in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn notes(notes: &[ReleaseNote], ctx: &ViewContext, format: OutputFormat) -> Result<String> {
    let entries: Vec<NoteEntry> = notes.iter().map(|n| NoteEntry::from_note(n, ctx)).collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
        OutputFormat::Html => Ok(render_notes(notes, ctx).into_string()),
        OutputFormat::Plain => {
            let mut out = String::new();
            for entry in &entries {
                let _ = writeln!(out, "v{} ({}) - {}", entry.version, entry.label, entry.date);
                let _ = writeln!(out, "  {}", entry.title);
                for bullet in &entry.bullets {
                    let _ = writeln!(out, "  * {bullet}");
                }
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Ten-cell text bar; out-of-range values saturate.
fn progress_bar(percent: i32) -> String {
    let filled = usize::try_from(percent.clamp(0, 100) / 10).unwrap_or(0);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}
