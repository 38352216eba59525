//! `squadhub` - the squadron's resource hub
//!
//! This library provides the filtering, view-model and rendering core of the
//! hub page: resources, projects and release notes, their search and chip
//! filters, and the static HTML document built from them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod copy;
pub mod data;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod model;
pub mod page;
pub mod palette;
pub mod render;
pub mod view;

pub use config::Config;
pub use controller::{ChipGroup, ProjectListController, ResourceListController};
pub use copy::{copy_link, ClipboardWriter, CopyFeedback, SystemClipboard};
pub use data::Dataset;
pub use error::{Error, Result};
pub use filter::{filter_projects, filter_resources, FilterState, Selection};
pub use logging::init_logging;
pub use model::{Project, ProjectStatus, ReleaseNote, Resource};
pub use page::{render_page, PageContext, RenderedPage};
pub use view::ViewContext;
