//! Markup for cards and lists.
//!
//! Every data-sourced string goes through [`Text`], which writes it with
//! [`escape_text`]. Rendering is a pure function of its inputs; a re-render
//! replaces the previous fragment wholesale.

use maud::{html, Markup, PreEscaped, Render};

use crate::format::escape_text;
use crate::model::{Project, ReleaseNote, Resource};
use crate::view::{LinkTarget, NoteEntry, ProjectCard, ResourceCard, StatusIcon, ViewContext};

/// Placeholder row for an empty project grid.
pub const NO_PROJECTS: &str = "No projects found.";

/// Data-sourced text, escaped on output.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a>(pub &'a str);

impl Render for Text<'_> {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&escape_text(self.0));
    }
}

const ICON_EXTERNAL: &str = r##"<svg width="16" height="16" viewBox="0 0 24 24" stroke-width="1.6" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true"><path d="M21 3L15 3M21 3L12 12M21 3V9" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"></path><path d="M21 13V19C21 20.1046 20.1046 21 19 21H5C3.89543 21 3 20.1046 3 19V5C3 3.89543 3.89543 3 5 3H11" stroke="currentColor" stroke-width="1.6" stroke-linecap="round"></path></svg>"##;

const ICON_COPY: &str = r##"<svg width="16" height="16" stroke-width="1.6" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true"><path d="M19.4 20H9.6C9.26863 20 9 19.7314 9 19.4V9.6C9 9.26863 9.26863 9 9.6 9H19.4C19.7314 9 20 9.26863 20 9.6V19.4C20 19.7314 19.7314 20 19.4 20Z" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"></path><path d="M15 9V4.6C15 4.26863 14.7314 4 14.4 4H4.6C4.26863 4 4 4.26863 4 4.6V14.4C4 14.7314 4.26863 15 4.6 15H9" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"></path></svg>"##;

const ICON_CHECK: &str = r##"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" aria-hidden="true"><path d="M20 7L9 18l-5-5" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

const ICON_CLOCK: &str = r##"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" aria-hidden="true"><path d="M12 6L12 12L18 12" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"></path><path d="M12 22C17.5228 22 22 17.5228 22 12C22 6.47715 17.5228 2 12 2C6.47715 2 2 6.47715 2 12C2 17.5228 6.47715 22 12 22Z" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"></path></svg>"##;

const ICON_ALERT: &str = r##"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" aria-hidden="true"><path d="M12 8v4m0 4h.01" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/><circle cx="12" cy="12" r="9" stroke="currentColor" stroke-width="2"/></svg>"##;

const ICON_DUE: &str = r##"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" aria-hidden="true"><path d="M8 7h8M8 12h8M8 17h5" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"##;

impl Render for StatusIcon {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(match self {
            Self::Check => ICON_CHECK,
            Self::Clock => ICON_CLOCK,
            Self::Alert => ICON_ALERT,
        });
    }
}

/// Markup for a single resource card.
#[must_use]
pub fn resource_card(card: &ResourceCard) -> Markup {
    html! {
        article.card data-tags=(Text(&card.tags)) {
            span.tag style={ "background:" (card.tag_background) "; color:" (card.tag_foreground) ";" } {
                (Text(&card.tag))
            }
            h3 { (Text(&card.title)) }
            p { (Text(&card.desc)) }
            div.actions {
                @match card.target {
                    LinkTarget::NewTab => {
                        a.ext href=(Text(&card.url)) target="_blank" rel="noopener" {
                            "Open link " (PreEscaped(ICON_EXTERNAL))
                        }
                    }
                    LinkTarget::InPlace => {
                        a.ext href=(Text(&card.url)) { "Open link" }
                    }
                }
                button.copy type="button" data-url=(Text(&card.url)) aria-label={ "Copy link to " (Text(&card.title)) } {
                    (PreEscaped(ICON_COPY)) " Copy"
                }
            }
        }
    }
}

/// Markup for a single project card.
#[must_use]
pub fn project_card(card: &ProjectCard) -> Markup {
    let classes = if card.status_class.is_empty() {
        "status".to_string()
    } else {
        format!("status {}", card.status_class)
    };
    html! {
        article.project {
            div {
                h3 { (Text(&card.title)) }
                p { (Text(&card.description)) }
            }
            div.proj-actions {
                span class=(classes) title={ "Status: " (Text(&card.status_label)) } {
                    (card.icon) " " (Text(&card.status_label))
                }
            }
            div.meta {
                (PreEscaped(ICON_DUE)) " Due: " (Text(&card.due))
            }
            div.progress role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=(card.progress) aria-label="Progress" {
                div.bar style={ "width:" (card.progress) "%;" } {}
            }
        }
    }
}

/// Markup for a single release note.
#[must_use]
pub fn note_entry(entry: &NoteEntry) -> Markup {
    html! {
        article.note {
            h3 { "v" (Text(&entry.version)) " " span.badge { (Text(&entry.label)) } }
            time datetime=(Text(&entry.datetime)) { (Text(&entry.date)) }
            p.note-title { (Text(&entry.title)) }
            ul {
                @for bullet in &entry.bullets {
                    li { (Text(bullet)) }
                }
            }
        }
    }
}

/// Rendered resource list plus the empty-state decision.
#[derive(Debug, Clone)]
pub struct ResourceGrid {
    /// Cards, concatenated in list order.
    pub markup: Markup,
    /// Number of cards rendered.
    pub count: usize,
}

impl ResourceGrid {
    /// Whether the separate empty-state element should be shown.
    #[must_use]
    pub fn show_empty_state(&self) -> bool {
        self.count == 0
    }
}

/// Render filtered resources. An empty result yields empty markup and
/// asks the caller to show the empty-state element.
#[must_use]
pub fn render_resource_grid(resources: &[&Resource], ctx: &ViewContext) -> ResourceGrid {
    let markup = html! {
        @for resource in resources {
            (resource_card(&ResourceCard::from_resource(resource, ctx)))
        }
    };
    ResourceGrid {
        markup,
        count: resources.len(),
    }
}

/// Render filtered projects, inlining a placeholder row when empty.
#[must_use]
pub fn render_project_grid(projects: &[&Project], ctx: &ViewContext) -> Markup {
    html! {
        @if projects.is_empty() {
            div.empty style="grid-column:1/-1;" { (NO_PROJECTS) }
        } @else {
            @for project in projects {
                (project_card(&ProjectCard::from_project(project, ctx)))
            }
        }
    }
}

/// Render every release note, in order.
#[must_use]
pub fn render_notes(notes: &[ReleaseNote], ctx: &ViewContext) -> Markup {
    html! {
        @for note in notes {
            (note_entry(&NoteEntry::from_note(note, ctx)))
        }
    }
}
