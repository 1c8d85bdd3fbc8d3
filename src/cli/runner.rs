use crate::{
    cli::{Commands, GenerateArgs, InitArgs, ListArgs, WorkspaceArgs},
    config::load_config,
    constants::exit_codes,
    error::{Error, Result},
    generate::{
        scaffold_config, AccessPolicy, GenerateRequest, GenerationStatus, Generator,
        ScaffoldStatus,
    },
    ioutils::{DryRunFileSystem, FileAccess, LocalFileSystem},
    license::NoLicense,
    prompt::{get_prompt_provider, Notifier},
    workspace::resolve_workspace_root,
};
use std::path::{Path, PathBuf};

/// Main entry point for CLI execution. Returns the process exit code.
pub fn run(command: Commands) -> Result<i32> {
    match command {
        Commands::Generate(args) => run_generate(args),
        Commands::Init(args) => run_init(args),
        Commands::List(args) => run_list(args),
    }
}

/// Runs the generation pipeline against the local file system and terminal.
pub fn run_generate(args: GenerateArgs) -> Result<i32> {
    let target_dir = absolute_path(&args.target_dir)?;
    let workspace_roots = workspace_roots(&args.workspace)?;
    let prompter = get_prompt_provider();

    let mut request = GenerateRequest::new(target_dir, workspace_roots);
    request.blueprint = args.blueprint;
    request.name = args.name;
    request.extension = args.extension;

    let status = if args.dry_run {
        let fs = DryRunFileSystem::new(LocalFileSystem::new());
        let status = Generator::new(&fs, &prompter, &NoLicense).dry_run(true).run(&request)?;
        for path in fs.planned_writes() {
            println!("[DRY RUN] {}", path.display());
        }
        status
    } else {
        Generator::new(&LocalFileSystem, &prompter, &NoLicense).run(&request)?
    };

    Ok(match status {
        GenerationStatus::Completed(report) => {
            let written = report.written().count();
            let skipped = report.warnings().count();
            log::info!("{written} file(s) written, {skipped} skipped with warnings");
            exit_codes::SUCCESS
        }
        GenerationStatus::Cancelled => exit_codes::SUCCESS,
        GenerationStatus::Aborted => exit_codes::FAILURE,
    })
}

/// Writes the starter configuration.
pub fn run_init(args: InitArgs) -> Result<i32> {
    let target = target_or_current_dir(args.target_dir)?;
    let workspace_roots = workspace_roots(&args.workspace)?;
    let status =
        scaffold_config(&LocalFileSystem, &get_prompt_provider(), &workspace_roots, &target);

    Ok(match status {
        ScaffoldStatus::Created(_) | ScaffoldStatus::AlreadyExists(_) => exit_codes::SUCCESS,
        ScaffoldStatus::Aborted => exit_codes::FAILURE,
    })
}

/// Prints every blueprint with its access tier and file count.
pub fn run_list(args: ListArgs) -> Result<i32> {
    let target = target_or_current_dir(args.target_dir)?;
    let workspace_roots = workspace_roots(&args.workspace)?;
    let notifier = get_prompt_provider();

    match list_blueprints(&LocalFileSystem, &workspace_roots, &target, &AccessPolicy::default()) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            notifier.error(&e.to_string());
            Ok(exit_codes::FAILURE)
        }
    }
}

/// One line per blueprint, in configuration order.
pub fn list_blueprints(
    fs: &dyn FileAccess,
    workspace_roots: &[PathBuf],
    target: &Path,
    policy: &AccessPolicy,
) -> Result<Vec<String>> {
    let root = resolve_workspace_root(workspace_roots, target)?;
    let config = load_config(fs, &root)?;

    Ok(config
        .iter()
        .map(|(name, blueprint)| {
            let files = blueprint.files.len();
            let plural = if files == 1 { "" } else { "s" };
            match policy.tier(name).label() {
                Some(label) => format!("{name} [{label}] ({files} file{plural})"),
                None => format!("{name} ({files} file{plural})"),
            }
        })
        .collect())
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        Error::Other(anyhow::anyhow!("Cannot resolve path '{}': {e}", path.display()))
    })
}

fn target_or_current_dir(target: Option<PathBuf>) -> Result<PathBuf> {
    match target {
        Some(target) => absolute_path(&target),
        None => Ok(std::env::current_dir()?),
    }
}

fn workspace_roots(args: &WorkspaceArgs) -> Result<Vec<PathBuf>> {
    if args.workspaces.is_empty() {
        return Ok(vec![std::env::current_dir()?]);
    }
    args.workspaces
        .iter()
        .map(|root| absolute_path(root))
        .collect()
}
