//! Full page document.
//!
//! Assembles the initial render of every list into one HTML document. The
//! calendar year for the footer is passed in so output stays reproducible.

use std::path::Path;

use maud::{html, Markup, DOCTYPE};
use tracing::{debug, info};

use crate::config::{Config, UiConfig};
use crate::controller::{
    ChipGroup, FocusLatch, ProjectListController, ResourceListController, ScrollToTop,
};
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::render::{render_notes, Text};
use crate::view::ViewContext;

/// Inputs for a page render.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Document title and heading.
    pub title: String,
    /// Stylesheet href.
    pub stylesheet: String,
    /// Script that wires the controls; empty to omit.
    pub script: String,
    /// Year shown in the footer.
    pub year: i32,
    /// View-model settings.
    pub view: ViewContext,
    /// Copy feedback timings, handed to the wiring script.
    pub ui: UiConfig,
    /// Scroll-to-top control as it should appear on load.
    pub scroll: ScrollToTop,
    /// Focus-outline latch as it should appear on load.
    pub focus: FocusLatch,
}

impl PageContext {
    /// Context for a freshly loaded page under `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette overrides are invalid.
    pub fn from_config(config: &Config, year: i32) -> Result<Self> {
        Ok(Self {
            title: config.site.title.clone(),
            stylesheet: config.site.stylesheet.clone(),
            script: config.site.script.clone(),
            year,
            view: config.view_context()?,
            ui: config.ui.clone(),
            scroll: ScrollToTop::new(config.ui.scroll_top_threshold),
            focus: FocusLatch::default(),
        })
    }
}

/// A rendered page and its content digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    html: String,
}

impl RenderedPage {
    /// The document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Consume into the document text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.html
    }

    /// BLAKE3 digest of the document, hex encoded.
    #[must_use]
    pub fn digest(&self) -> String {
        digest_bytes(self.html.as_bytes())
    }

    /// Write the document to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputWrite`] if the directory or file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let write_err = |source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, &self.html).map_err(write_err)?;
        info!(path = %path.display(), bytes = self.html.len(), digest = %self.digest(), "Wrote page");
        Ok(())
    }

    /// Compare against the page already at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::StaleOutput`] if its digest differs from this render.
    pub fn check_against(&self, path: &Path) -> Result<()> {
        let on_disk = std::fs::read(path)?;
        let expected = self.digest();
        let found = digest_bytes(&on_disk);
        debug!(path = %path.display(), %expected, %found, "Checking page");
        if expected == found {
            Ok(())
        } else {
            Err(Error::StaleOutput {
                path: path.to_path_buf(),
                expected,
                found,
            })
        }
    }
}

/// BLAKE3 digest of arbitrary bytes, hex encoded.
#[must_use]
pub fn digest_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Which data attribute a chip group carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChipAttr {
    /// `data-filter`, resource categories.
    Category,
    /// `data-pfilter`, project statuses.
    Status,
}

fn chips(group: &ChipGroup, attr: ChipAttr) -> Markup {
    html! {
        div.chips role="tablist" {
            @for value in group.values() {
                @let active = group.is_active(value);
                @let selected = if active { "true" } else { "false" };
                @match attr {
                    ChipAttr::Category => {
                        button.chip.active[active] type="button" role="tab" aria-selected=(selected) data-filter=(Text(value)) {
                            (Text(&chip_label(value)))
                        }
                    }
                    ChipAttr::Status => {
                        button.chip.active[active] type="button" role="tab" aria-selected=(selected) data-pfilter=(Text(value)) {
                            (Text(&chip_label(value)))
                        }
                    }
                }
            }
        }
    }
}

/// Human label for a chip value.
fn chip_label(value: &str) -> String {
    match value {
        "all" => "All".to_string(),
        "in-progress" => "In Progress".to_string(),
        other => {
            let mut chars = other.chars();
            chars
                .next()
                .map_or_else(String::new, |c| c.to_uppercase().chain(chars).collect())
        }
    }
}

/// Render the whole page from `data` with every list unfiltered.
#[must_use]
pub fn render_page(data: &Dataset, ctx: &PageContext) -> RenderedPage {
    let resources = ResourceListController::new(&data.resources, ctx.view.clone());
    let projects = ProjectListController::new(&data.projects, ctx.view.clone());
    let resource_pass = resources.render();
    let project_pass = projects.render();

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (Text(&ctx.title)) }
                link rel="stylesheet" href=(Text(&ctx.stylesheet));
            }
            body .show-focus[ctx.focus.is_enabled()] {
                header .site-header {
                    h1 { (Text(&ctx.title)) }
                }
                main {
                    section #resources {
                        h2 { "Resources" }
                        input #search type="search" placeholder="Search resources" aria-label="Search resources";
                        (chips(resources.chips(), ChipAttr::Category))
                        div #resourceGrid .grid
                            data-copy-ms=(ctx.ui.copy_feedback_ms)
                            data-copy-failed-ms=(ctx.ui.copy_failure_feedback_ms) {
                            (resource_pass.grid.markup)
                        }
                        div #emptyState .empty hidden[!resource_pass.grid.show_empty_state()] {
                            "No resources match your search."
                        }
                    }
                    section #projects {
                        h2 { "Projects" }
                        input #projectSearch type="search" placeholder="Search projects" aria-label="Search projects";
                        (chips(projects.chips(), ChipAttr::Status))
                        div #projectGrid .grid { (project_pass.markup) }
                    }
                    section #notes-section {
                        h2 { "Release Notes" }
                        div #notes { (render_notes(&data.notes, &ctx.view)) }
                    }
                }
                footer {
                    "© " span #year { (ctx.year) } " " (Text(&ctx.title))
                }
                button #toTop .to-top .show[ctx.scroll.is_visible()] type="button"
                    data-threshold=(ctx.scroll.threshold()) aria-label="Back to top" { "↑" }
                @if !ctx.script.is_empty() {
                    script src=(Text(&ctx.script)) defer {}
                }
            }
        }
    };

    RenderedPage {
        html: markup.into_string(),
    }
}
