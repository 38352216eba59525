//! List controllers and page-level UI state.
//!
//! A controller owns one list's [`FilterState`] and chip group. Every input
//! event mutates that state and returns a complete fresh render pass; there
//! is no debouncing and no incremental patching. The host (a browser shell,
//! a terminal UI, a test) swaps the returned markup in wholesale.

use maud::Markup;
use tracing::debug;

use crate::filter::{distinct_tags, filter_projects, filter_resources, FilterState, Selection, ALL};
use crate::model::{Project, Resource};
use crate::render::{render_project_grid, render_resource_grid, ResourceGrid};
use crate::view::ViewContext;

/// Status chip values, in display order.
pub const STATUS_CHIPS: &[&str] = &[ALL, "planning", "in-progress", "completed"];

/// Default scroll offset past which the scroll-to-top control appears.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 400.0;

/// A mutually exclusive group of filter chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipGroup {
    values: Vec<String>,
    active: usize,
}

impl ChipGroup {
    /// Build a group; the first value starts active.
    #[must_use]
    pub fn new<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            values.push(ALL.to_string());
        }
        Self { values, active: 0 }
    }

    /// `all` followed by every distinct tag in `resources`.
    #[must_use]
    pub fn for_resources(resources: &[Resource]) -> Self {
        Self::new(std::iter::once(ALL).chain(distinct_tags(resources)))
    }

    /// `all` followed by the recognized statuses.
    #[must_use]
    pub fn for_projects() -> Self {
        Self::new(STATUS_CHIPS.iter().copied())
    }

    /// Chip values, in display order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// The active chip value.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.values[self.active]
    }

    /// Whether `value` is the active chip.
    #[must_use]
    pub fn is_active(&self, value: &str) -> bool {
        self.active() == value
    }

    /// Make `value` the single active chip.
    ///
    /// Returns `false` and leaves the group unchanged if no chip has
    /// that value.
    pub fn select(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}

/// Result of re-rendering the resource list.
#[derive(Debug, Clone)]
pub struct ResourcePass {
    /// Grid markup and count.
    pub grid: ResourceGrid,
}

impl ResourcePass {
    /// Whether the empty-state element should be shown.
    #[must_use]
    pub fn show_empty_state(&self) -> bool {
        self.grid.show_empty_state()
    }
}

/// Result of re-rendering the project list.
#[derive(Debug, Clone)]
pub struct ProjectPass {
    /// Grid markup, or the placeholder row.
    pub markup: Markup,
    /// Number of matching projects.
    pub count: usize,
}

/// Controller for the resource list.
#[derive(Debug)]
pub struct ResourceListController<'a> {
    records: &'a [Resource],
    state: FilterState,
    chips: ChipGroup,
    view: ViewContext,
}

impl<'a> ResourceListController<'a> {
    /// Create a controller with an empty query and `all` selected.
    #[must_use]
    pub fn new(records: &'a [Resource], view: ViewContext) -> Self {
        Self {
            records,
            state: FilterState::default(),
            chips: ChipGroup::for_resources(records),
            view,
        }
    }

    /// Current filter state.
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Category chips.
    #[must_use]
    pub fn chips(&self) -> &ChipGroup {
        &self.chips
    }

    /// Search box changed.
    pub fn on_input(&mut self, text: &str) -> ResourcePass {
        text.clone_into(&mut self.state.query);
        self.render()
    }

    /// Category chip clicked. Unknown values leave the selection unchanged.
    pub fn on_chip(&mut self, value: &str) -> ResourcePass {
        if self.chips.select(value) {
            self.state.selection = Selection::from(value);
        } else {
            debug!(value, "Ignoring unknown category chip");
        }
        self.render()
    }

    /// Full filter and render pass for the current state.
    #[must_use]
    pub fn render(&self) -> ResourcePass {
        let matches = filter_resources(self.records, &self.state);
        debug!(
            query = %self.state.query,
            category = %self.state.selection.value(),
            matches = matches.len(),
            "Rendering resources"
        );
        ResourcePass {
            grid: render_resource_grid(&matches, &self.view),
        }
    }
}

/// Controller for the project list.
#[derive(Debug)]
pub struct ProjectListController<'a> {
    records: &'a [Project],
    state: FilterState,
    chips: ChipGroup,
    view: ViewContext,
}

impl<'a> ProjectListController<'a> {
    /// Create a controller with an empty query and `all` selected.
    #[must_use]
    pub fn new(records: &'a [Project], view: ViewContext) -> Self {
        Self {
            records,
            state: FilterState::default(),
            chips: ChipGroup::for_projects(),
            view,
        }
    }

    /// Current filter state.
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Status chips.
    #[must_use]
    pub fn chips(&self) -> &ChipGroup {
        &self.chips
    }

    /// Search box changed.
    pub fn on_input(&mut self, text: &str) -> ProjectPass {
        text.clone_into(&mut self.state.query);
        self.render()
    }

    /// Status chip clicked. Unknown values leave the selection unchanged.
    pub fn on_chip(&mut self, value: &str) -> ProjectPass {
        if self.chips.select(value) {
            self.state.selection = Selection::from(value);
        } else {
            debug!(value, "Ignoring unknown status chip");
        }
        self.render()
    }

    /// Full filter and render pass for the current state.
    #[must_use]
    pub fn render(&self) -> ProjectPass {
        let matches = filter_projects(self.records, &self.state);
        debug!(
            query = %self.state.query,
            status = %self.state.selection.value(),
            matches = matches.len(),
            "Rendering projects"
        );
        ProjectPass {
            markup: render_project_grid(&matches, &self.view),
            count: matches.len(),
        }
    }
}

/// Visibility of the scroll-to-top control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToTop {
    threshold: f64,
    visible: bool,
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollToTop {
    /// Hidden control that appears past `threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Page scrolled to `offset`; returns the new visibility.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset > self.threshold;
        self.visible
    }

    /// Whether the control is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Offset the control appears past.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Keyboard focus styling, switched on by the first Tab press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusLatch {
    enabled: bool,
}

impl FocusLatch {
    /// A key was released. Once enabled the latch stays enabled.
    pub fn on_key_up(&mut self, key: &str) -> bool {
        if key == "Tab" {
            self.enabled = true;
        }
        self.enabled
    }

    /// Whether focus styles are shown.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
