use super::extension::replace_source_extension;
use super::outcome::{FileOutcome, GenerationReport};
use super::policy::AccessPolicy;
use super::safety::check_rendered_path;
use crate::case::CaseVariants;
use crate::config::{load_config, BlueprintConfig, FileSpec};
use crate::constants::prompts;
use crate::error::Result;
use crate::ioutils::{is_permission_denied, FileAccess};
use crate::license::LicenseCheck;
use crate::prompt::{
    ChoiceItem, ConfirmationConfig, PromptProvider, SingleChoiceConfig, TextPromptConfig,
};
use crate::renderer::{TemplateRenderer, TokenRenderer, Variables};
use crate::workspace::resolve_workspace_root;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// Inputs of one generation run. Preset answers skip the matching prompt.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub target_dir: PathBuf,
    pub workspace_roots: Vec<PathBuf>,
    pub blueprint: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
}

impl GenerateRequest {
    pub fn new(target_dir: impl Into<PathBuf>, workspace_roots: Vec<PathBuf>) -> Self {
        Self { target_dir: target_dir.into(), workspace_roots, ..Self::default() }
    }

    pub fn with_blueprint(mut self, blueprint: impl Into<String>) -> Self {
        self.blueprint = Some(blueprint.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

/// How a generation run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationStatus {
    /// Every file was attempted; individual files may still have been skipped.
    Completed(GenerationReport),
    /// The user dismissed a prompt. Nothing was written.
    Cancelled,
    /// A fatal problem was reported to the user. Nothing was written.
    Aborted,
}

type Step<T> = ControlFlow<GenerationStatus, T>;

/// Runs the generation pipeline against injected file, prompt and license
/// capabilities.
///
/// Steps run strictly in order: workspace root, config, blueprint, name,
/// extension, then each file in blueprint order. Any failure before the
/// first file ends the run without touching the file system; failures of a
/// single file are reported and the next file is attempted.
pub struct Generator<'a> {
    fs: &'a dyn FileAccess,
    prompter: &'a dyn PromptProvider,
    license: &'a dyn LicenseCheck,
    renderer: &'a dyn TemplateRenderer,
    policy: AccessPolicy,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    pub fn new(
        fs: &'a dyn FileAccess,
        prompter: &'a dyn PromptProvider,
        license: &'a dyn LicenseCheck,
    ) -> Self {
        Self {
            fs,
            prompter,
            license,
            renderer: &TokenRenderer,
            policy: AccessPolicy::default(),
            dry_run: false,
        }
    }

    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_renderer(mut self, renderer: &'a dyn TemplateRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Only affects message prefixes; pair it with a dry-run file capability.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Executes the complete generation workflow.
    ///
    /// `Err` is reserved for the prompt capability itself failing (for example
    /// a closed terminal); every other problem is notified and reported through
    /// [`GenerationStatus`].
    pub fn run(&self, request: &GenerateRequest) -> Result<GenerationStatus> {
        let workspace_root =
            match resolve_workspace_root(&request.workspace_roots, &request.target_dir) {
                Ok(root) => root,
                Err(e) => return Ok(self.abort(&e.to_string())),
            };

        let config = match load_config(self.fs, &workspace_root) {
            Ok(config) => config,
            Err(e) => return Ok(self.abort(&e.to_string())),
        };
        if config.is_empty() {
            return Ok(self.abort(&crate::error::Error::NoBlueprints.to_string()));
        }

        let blueprint_name = match self.select_blueprint(&config, request.blueprint.as_deref())? {
            ControlFlow::Continue(name) => name,
            ControlFlow::Break(status) => return Ok(status),
        };
        let name = match self.collect_name(request.name.as_deref())? {
            ControlFlow::Continue(name) => name,
            ControlFlow::Break(status) => return Ok(status),
        };
        let extension =
            match self.collect_extension(&blueprint_name, request.extension.as_deref())? {
                ControlFlow::Continue(extension) => extension,
                ControlFlow::Break(status) => return Ok(status),
            };

        let Some(blueprint) = config.get(&blueprint_name) else {
            return Ok(self.abort(&format!("Blueprint '{blueprint_name}' not found in config.")));
        };

        let variables = CaseVariants::new(&name).to_variables();
        log::debug!("Generating '{blueprint_name}' for '{name}' into '{}'", request.target_dir.display());

        let mut outcomes = Vec::with_capacity(blueprint.files.len());
        for spec in &blueprint.files {
            let outcome =
                self.process_file(&request.target_dir, &variables, extension.as_deref(), spec)?;
            let message = outcome.get_message(self.dry_run);
            if outcome.is_warning() {
                log::warn!("{message}");
                self.prompter.warn(&message);
            } else {
                log::info!("{message}");
            }
            outcomes.push(outcome);
        }

        let prefix = if self.dry_run { "[DRY RUN] " } else { "" };
        self.prompter.info(&format!(
            "{prefix}Blueprint '{blueprint_name}' generated successfully for '{name}'."
        ));

        Ok(GenerationStatus::Completed(GenerationReport {
            blueprint: blueprint_name,
            name,
            outcomes,
        }))
    }

    fn abort(&self, message: &str) -> GenerationStatus {
        log::error!("{message}");
        self.prompter.error(message);
        GenerationStatus::Aborted
    }

    fn select_blueprint(
        &self,
        config: &BlueprintConfig,
        preset: Option<&str>,
    ) -> Result<Step<String>> {
        let selected = match preset {
            Some(preset) if config.contains(preset) => preset.to_string(),
            Some(preset) => {
                return Ok(ControlFlow::Break(
                    self.abort(&format!("Blueprint '{preset}' not found in config.")),
                ))
            }
            None => {
                let names: Vec<&str> = config.names().collect();
                let items = names
                    .iter()
                    .map(|name| {
                        let item = ChoiceItem::new(*name);
                        match self.policy.tier(name).label() {
                            Some(label) => item.with_description(label),
                            None => item,
                        }
                    })
                    .collect();
                let choice = self.prompter.prompt_single_choice(&SingleChoiceConfig {
                    prompt: prompts::SELECT_BLUEPRINT.to_string(),
                    items,
                })?;
                match choice.and_then(|index| names.get(index)) {
                    Some(name) => name.to_string(),
                    None => return Ok(ControlFlow::Break(GenerationStatus::Cancelled)),
                }
            }
        };

        if self.policy.is_paid(&selected) && !self.license.has_license(&selected) {
            let message = format!(
                "Blueprint '{selected}' is a paid feature. Please purchase a license to unlock this blueprint."
            );
            log::warn!("{message}");
            self.prompter.warn(&message);
            return Ok(ControlFlow::Break(GenerationStatus::Aborted));
        }

        Ok(ControlFlow::Continue(selected))
    }

    fn collect_name(&self, preset: Option<&str>) -> Result<Step<String>> {
        let name = match preset {
            Some(name) => name.to_string(),
            None => {
                let answer = self.prompter.prompt_text(&TextPromptConfig {
                    prompt: prompts::ENTER_NAME.to_string(),
                    blank_error: prompts::EMPTY_NAME.to_string(),
                })?;
                match answer {
                    Some(name) => name,
                    None => return Ok(ControlFlow::Break(GenerationStatus::Cancelled)),
                }
            }
        };

        if name.trim().is_empty() {
            return Ok(ControlFlow::Break(self.abort(prompts::EMPTY_NAME)));
        }
        Ok(ControlFlow::Continue(name))
    }

    fn collect_extension(
        &self,
        blueprint: &str,
        preset: Option<&str>,
    ) -> Result<Step<Option<String>>> {
        if !self.policy.is_component(blueprint) {
            if let Some(preset) = preset {
                log::debug!("Ignoring extension '{preset}' for non-component blueprint '{blueprint}'");
            }
            return Ok(ControlFlow::Continue(None));
        }

        if let Some(preset) = preset {
            return Ok(match self.policy.find_extension(preset) {
                Some(extension) => ControlFlow::Continue(Some(extension.to_string())),
                None => ControlFlow::Break(
                    self.abort(&format!("Unsupported file extension '{preset}'.")),
                ),
            });
        }

        let items = self
            .policy
            .extensions
            .iter()
            .map(|(ext, description)| ChoiceItem::new(format!(".{ext}")).with_description(description))
            .collect();
        let choice = self.prompter.prompt_single_choice(&SingleChoiceConfig {
            prompt: prompts::SELECT_EXTENSION.to_string(),
            items,
        })?;

        Ok(match choice.and_then(|index| self.policy.extensions.get(index)) {
            Some((ext, _)) => ControlFlow::Continue(Some(ext.clone())),
            None => ControlFlow::Break(GenerationStatus::Cancelled),
        })
    }

    fn process_file(
        &self,
        target_dir: &Path,
        variables: &Variables,
        extension: Option<&str>,
        spec: &FileSpec,
    ) -> Result<FileOutcome> {
        let mut rendered_path = self.renderer.render(&spec.path, variables);
        if let Some(extension) = extension {
            rendered_path = replace_source_extension(&rendered_path, extension);
        }
        let content = self.renderer.render(&spec.content, variables);

        let target = match check_rendered_path(target_dir, &rendered_path) {
            Ok(target) => target,
            Err(reason) => return Ok(FileOutcome::Rejected { rendered: rendered_path, reason }),
        };

        if let Some(parent) = target.parent() {
            if let Err(e) = self.fs.create_dir_all(parent) {
                return Ok(FileOutcome::DirectoryFailed { target, reason: e.to_string() });
            }
        }

        let target_exists = self.fs.exists(&target);
        if target_exists {
            let overwrite = self.prompter.prompt_confirmation(&ConfirmationConfig {
                prompt: format!("File '{rendered_path}' already exists. Overwrite?"),
                default: false,
            })?;
            if !overwrite {
                return Ok(FileOutcome::SkippedExisting { target });
            }
        }

        Ok(match self.fs.write(&target, &content) {
            Ok(()) if target_exists => FileOutcome::Overwritten { target },
            Ok(()) => FileOutcome::Created { target },
            Err(e) if is_permission_denied(&e) => FileOutcome::PermissionDenied { target },
            Err(e) => FileOutcome::WriteFailed { target, reason: e.to_string() },
        })
    }
}
