//! Command-line interface for squadhub.
//!
//! This module provides the CLI structure for the `squadhub` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    BuildCommand, ConfigCommand, CopyCommand, NotesCommand, OutputFormat, ProjectsCommand,
    ResourcesCommand,
};

/// squadhub - the squadron's resource hub
///
/// Builds the static hub page and lets you search resources, projects and
/// release notes from the terminal.
#[derive(Debug, Parser)]
#[command(name = "squadhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the hub page
    Build(BuildCommand),

    /// Search and filter resources
    Resources(ResourcesCommand),

    /// Search and filter projects
    Projects(ProjectsCommand),

    /// Show release notes
    Notes(NotesCommand),

    /// Copy a resource link to the clipboard
    Copy(CopyCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.verbose, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn notes_cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Notes(NotesCommand {
                format: OutputFormat::Plain,
            }),
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "squadhub");
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;
        assert_eq!(notes_cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(notes_cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(notes_cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(notes_cli(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["squadhub", "build", "-o", "site/index.html"]).unwrap();
        match cli.command {
            Command::Build(cmd) => {
                assert_eq!(cmd.output, Some(PathBuf::from("site/index.html")));
                assert!(!cmd.check);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_build_stdout_conflicts_with_check() {
        assert!(Cli::try_parse_from(["squadhub", "build", "--stdout", "--check"]).is_err());
    }

    #[test]
    fn test_parse_resources_defaults() {
        let cli = Cli::try_parse_from(["squadhub", "resources"]).unwrap();
        match cli.command {
            Command::Resources(cmd) => {
                assert_eq!(cmd.query, "");
                assert_eq!(cmd.category, "all");
                assert_eq!(cmd.format, OutputFormat::Plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_resources_with_filters() {
        let cli =
            Cli::try_parse_from(["squadhub", "resources", "radio", "-t", "Flight", "-f", "json"])
                .unwrap();
        match cli.command {
            Command::Resources(cmd) => {
                assert_eq!(cmd.query, "radio");
                assert_eq!(cmd.category, "Flight");
                assert_eq!(cmd.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_projects_status() {
        let cli = Cli::try_parse_from(["squadhub", "projects", "-s", "planning"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Projects(ProjectsCommand { ref status, .. }) if status == "planning"
        ));
    }

    #[test]
    fn test_parse_copy() {
        let cli = Cli::try_parse_from(["squadhub", "copy", "Cadet Uniform Regulations"]).unwrap();
        assert!(matches!(cli.command, Command::Copy(_)));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["squadhub", "-c", "/custom/config.toml", "notes"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose_and_quiet() {
        let cli = Cli::try_parse_from(["squadhub", "-vv", "notes"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let cli = Cli::try_parse_from(["squadhub", "-q", "notes"]).unwrap();
        assert!(cli.quiet);
    }
}
