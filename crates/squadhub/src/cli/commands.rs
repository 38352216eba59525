//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Build command arguments.
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Write the page here instead of the configured output path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the page to stdout instead of writing a file
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Fail if the page on disk differs from a fresh render
    #[arg(long)]
    pub check: bool,
}

/// Resources command arguments.
#[derive(Debug, Args)]
pub struct ResourcesCommand {
    /// Free-text query (title, description, URL, tags)
    #[arg(default_value = "")]
    pub query: String,

    /// Only resources carrying this tag ("all" for no restriction)
    #[arg(short = 't', long, default_value = "all")]
    pub category: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Projects command arguments.
#[derive(Debug, Args)]
pub struct ProjectsCommand {
    /// Free-text query (title, description)
    #[arg(default_value = "")]
    pub query: String,

    /// Only projects with this status code ("all" for no restriction)
    #[arg(short, long, default_value = "all")]
    pub status: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Notes command arguments.
#[derive(Debug, Args)]
pub struct NotesCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Copy command arguments.
#[derive(Debug, Args)]
pub struct CopyCommand {
    /// Title of the resource whose link to copy (case-insensitive)
    pub title: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON view models
    Json,
    /// Rendered markup fragment
    Html,
}
