use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Scaffold files from the blueprints defined in `.blueprint-architect.json`.
#[derive(Parser, Debug)]
#[command(name = "blueprint", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate files from a blueprint into a target directory.
    Generate(GenerateArgs),
    /// Write a starter configuration to the workspace root.
    #[command(alias = "scaffold-config")]
    Init(InitArgs),
    /// List the blueprints defined for a workspace.
    List(ListArgs),
}

/// Workspace roots shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct WorkspaceArgs {
    /// Workspace root; repeat for multi-root workspaces. Defaults to the current directory.
    #[arg(short, long = "workspace", value_name = "DIR")]
    pub workspaces: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory the rendered files are written into.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    /// Blueprint to generate instead of choosing interactively.
    #[arg(short, long)]
    pub blueprint: Option<String>,

    /// Base name instead of prompting for it.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output extension for component blueprints (`tsx`, `jsx`, `ts` or `js`).
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Location used to pick the workspace root. Defaults to the current directory.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Location used to pick the workspace root. Defaults to the current directory.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
