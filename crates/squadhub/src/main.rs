//! `squadhub` - CLI for the squadron hub
//!
//! This binary builds the hub page and exposes its resource, project and
//! release-note lists from the terminal.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use chrono::Datelike;
use clap::Parser;

use squadhub::cli::{
    output, BuildCommand, Cli, Command, ConfigCommand, CopyCommand, NotesCommand,
    ProjectsCommand, ResourcesCommand,
};
use squadhub::copy::HoldOutcome;
use squadhub::{
    copy_link, filter_projects, filter_resources, init_logging, render_page, Config, Dataset,
    FilterState, PageContext, SystemClipboard, ViewContext,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        // Checking a file must not depend on the default config loading
        Command::Config(ConfigCommand::Validate { file }) => handle_validate(file.or(cli.config)),
        command => {
            let config = Config::load_from(cli.config)?;

            // Config commands must work even when the dataset is broken
            match command {
                Command::Config(config_cmd) => handle_config(&config, config_cmd),
                command => run(&config, command),
            }
        }
    }
}

fn run(config: &Config, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let data = Dataset::load_or_builtin(config.data.path.as_deref())?;
    let view = config.view_context()?;

    match command {
        Command::Build(build_cmd) => handle_build(config, &data, &build_cmd),
        Command::Resources(resources_cmd) => handle_resources(&data, &view, resources_cmd),
        Command::Projects(projects_cmd) => handle_projects(&data, &view, projects_cmd),
        Command::Notes(notes_cmd) => handle_notes(&data, &view, &notes_cmd),
        Command::Copy(copy_cmd) => handle_copy(config, &data, &copy_cmd),
        Command::Config(config_cmd) => handle_config(config, config_cmd),
    }
}

fn handle_build(
    config: &Config,
    data: &Dataset,
    cmd: &BuildCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = PageContext::from_config(config, chrono::Local::now().year())?;
    let page = render_page(data, &ctx);

    if cmd.stdout {
        println!("{}", page.as_str());
        return Ok(());
    }

    let path = cmd
        .output
        .clone()
        .unwrap_or_else(|| config.site.output_path.clone());

    if cmd.check {
        page.check_against(&path)?;
        println!("{} is up to date.", path.display());
    } else {
        page.write_to(&path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn handle_resources(
    data: &Dataset,
    view: &ViewContext,
    cmd: ResourcesCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = FilterState::new(cmd.query, cmd.category);
    let matches = filter_resources(&data.resources, &state);
    println!("{}", output::resources(&matches, view, cmd.format)?);
    Ok(())
}

fn handle_projects(
    data: &Dataset,
    view: &ViewContext,
    cmd: ProjectsCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = FilterState::new(cmd.query, cmd.status);
    let matches = filter_projects(&data.projects, &state);
    println!("{}", output::projects(&matches, view, cmd.format)?);
    Ok(())
}

fn handle_notes(
    data: &Dataset,
    view: &ViewContext,
    cmd: &NotesCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", output::notes(&data.notes, view, cmd.format)?);
    Ok(())
}

fn handle_copy(
    config: &Config,
    data: &Dataset,
    cmd: &CopyCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let resource = data.find_resource(&cmd.title)?;
    let mut clipboard = SystemClipboard::default();
    let feedback = copy_link(&mut clipboard, &resource.url, &config.ui);
    println!("{}: {}", feedback.text(), resource.url);

    if feedback.is_success()
        && SystemClipboard::selection_is_process_bound()
        && !config.ui.clipboard_hold().is_zero()
    {
        println!(
            "Keeping the link on the clipboard until something else is copied (at most {}s)...",
            config.ui.clipboard_hold().as_secs()
        );
        if clipboard.hold(&config.ui) == HoldOutcome::TimedOut {
            println!("Released the clipboard; the link is no longer available to paste.");
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Site]");
                println!("  Title:              {}", config.site.title);
                println!("  Date style:         {:?}", config.site.date_style);
                println!("  Stylesheet:         {}", config.site.stylesheet);
                println!("  Output path:        {}", config.site.output_path.display());
                println!();
                println!("[Data]");
                match &config.data.path {
                    Some(path) => println!("  Dataset:            {}", path.display()),
                    None => println!("  Dataset:            built-in"),
                }
                println!();
                println!("[UI]");
                println!("  Copy feedback:      {} ms", config.ui.copy_feedback_ms);
                println!(
                    "  Failure feedback:   {} ms",
                    config.ui.copy_failure_feedback_ms
                );
                println!("  Scroll threshold:   {} px", config.ui.scroll_top_threshold);
                println!();
                println!("[Palette]");
                println!("  Overrides:          {}", config.palette.len());
                for (tag, color) in &config.palette {
                    println!("    {tag:<16} {color}");
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => return handle_validate(file),
    }
    Ok(())
}

fn handle_validate(file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    Config::load_from(Some(path))?;
    println!("Configuration is valid.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_validate_ignores_broken_global_config() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("broken.toml", "[palette]\nDrill = \"red\"\n")?;
            jail.create_file("good.toml", "[site]\ntitle = \"410 Squadron\"\n")?;

            let cli = parse(&[
                "squadhub", "-c", "broken.toml", "config", "validate", "-f", "good.toml",
            ]);
            assert!(dispatch(cli).is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_validate_fails_on_invalid_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("broken.toml", "[ui]\ncopy_feedback_ms = 0\n")?;

            let cli = parse(&["squadhub", "config", "validate", "-f", "broken.toml"]);
            assert!(dispatch(cli).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_validate_falls_back_to_global_config_flag() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("broken.toml", "[palette]\nDrill = \"red\"\n")?;

            let cli = parse(&["squadhub", "-c", "broken.toml", "config", "validate"]);
            assert!(dispatch(cli).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_other_commands_still_need_valid_config() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("broken.toml", "[palette]\nDrill = \"red\"\n")?;

            let cli = parse(&["squadhub", "-c", "broken.toml", "config", "path"]);
            assert!(dispatch(cli).is_err());
            Ok(())
        });
    }
}
