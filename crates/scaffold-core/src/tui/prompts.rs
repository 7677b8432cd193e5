//! Charm-style CLI prompts using cliclack

use crate::catalog::CatalogEntry;
use crate::config::pin::{parse_runtime_version, MIN_NODE_MAJOR, PIN_FILE};
use crate::error::ScaffoldError;
use crate::planner::{plan_dependencies, DependencySet};
use crate::product::{ProductConfig, SetupSummary};
use crate::project::Materializer;
use crate::record::ConfigurationRecord;
use crate::runtime::{check, InstallStep, NodeProbe, PackageInstaller};
use crate::templates::{resolve_layers, TemplateLayer, TemplateSource};
use crate::wizard::{Answer, Prompter, Validator, Wizard, WizardOutcome};
use anyhow::Result;
use colored::Colorize;
use console::Term;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Editor probed to decide whether to suggest opening the project
const EDITOR_COMMAND: &str = "code";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the built-in ones
    pub template_dir: Option<PathBuf>,

    /// Skip dependency and browser installation
    pub skip_install: bool,
}

/// Prompter rendering to the terminal through cliclack
pub struct CliclackPrompter {
    term: Term,
}

impl Default for CliclackPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl CliclackPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

/// cliclack reports Esc / Ctrl+C as an interrupted read
fn answer<T>(result: io::Result<T>) -> Result<Answer<T>, ScaffoldError> {
    match result {
        Ok(value) => Ok(Answer::Value(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Answer::Cancelled),
        Err(e) => Err(e.into()),
    }
}

impl Prompter for CliclackPrompter {
    fn text(
        &mut self,
        message: &str,
        placeholder: &str,
        validator: Validator,
    ) -> Result<Answer<String>, ScaffoldError> {
        answer(
            cliclack::input(message)
                .placeholder(placeholder)
                .validate(move |input: &String| validator(input))
                .interact::<String>(),
        )
    }

    fn select<T>(
        &mut self,
        message: &str,
        options: &[CatalogEntry<T>],
    ) -> Result<Answer<T>, ScaffoldError>
    where
        T: Copy + Eq + fmt::Debug + 'static,
    {
        let mut select = cliclack::select(message);
        for entry in options.iter().filter(|e| e.selectable) {
            select = select.item(
                entry.value,
                entry.display_label(),
                entry.hint.unwrap_or_default(),
            );
        }
        if let Some(recommended) = options.iter().find(|e| e.selectable && e.recommended) {
            select = select.initial_value(recommended.value);
        }

        answer(select.interact())
    }

    fn multiselect<T>(
        &mut self,
        message: &str,
        options: &[CatalogEntry<T>],
    ) -> Result<Answer<Vec<T>>, ScaffoldError>
    where
        T: Copy + Eq + fmt::Debug + 'static,
    {
        let mut multi = cliclack::multiselect(message);
        for entry in options.iter().filter(|e| e.selectable) {
            multi = multi.item(
                entry.value,
                entry.display_label(),
                entry.hint.unwrap_or_default(),
            );
        }

        answer(multi.required(false).interact())
    }

    fn confirm(&mut self, message: &str, initial: bool) -> Result<Answer<bool>, ScaffoldError> {
        answer(cliclack::confirm(message).initial_value(initial).interact())
    }

    fn clear_lines(&mut self, count: usize) -> Result<(), ScaffoldError> {
        self.term.clear_last_lines(count)?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), ScaffoldError> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Pick the template source
    let source = setup_source(config, &args)?;
    let base_dir = std::env::current_dir()?;

    // Step 2: Ask the configuration questions
    let mut prompter = CliclackPrompter::new();
    let record = match Wizard::new(&base_dir).run(&mut prompter)? {
        WizardOutcome::Completed(record) => record,
        WizardOutcome::Cancelled => {
            cliclack::outro_cancel("Operation cancelled.")?;
            return Ok(());
        }
    };
    tracing::info!(product = config.name(), ?record, "configuration complete");

    // Step 3: Resolve template layers before touching the filesystem
    let layers = match resolve_layers(&record, &source) {
        Ok(layers) => layers,
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("The template set is incomplete, please reinstall or fix --template-dir.");
        }
    };

    // Step 4: Check the runtime the pin file will record
    check_runtime()?;

    // Step 5: Create project
    let target = record.target_dir(&base_dir);
    create_project(&source, &layers, &target)?;

    // Step 6: Install dependencies and browsers
    let installed = install(&record, &target, args.skip_install).await?;

    // Step 7: Show next steps
    let summary = SetupSummary {
        installed,
        editor_available: check::is_command_available(EDITOR_COMMAND),
    };
    print_next_steps(config, &target, &record, summary)?;

    Ok(())
}

fn setup_source<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<TemplateSource> {
    let local = args
        .template_dir
        .clone()
        .or_else(|| std::env::var_os(config.template_dir_env()).map(PathBuf::from));

    let source = match local {
        Some(path) => {
            if !path.is_dir() {
                anyhow::bail!("Template directory does not exist: {}", path.display());
            }
            TemplateSource::local(path)
        }
        None => TemplateSource::embedded(),
    };
    cliclack::log::info(format!("Using {}", source.describe()))?;

    Ok(source)
}

fn check_runtime() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let node = check::check_node();
    let Some(raw) = node.version.as_deref() else {
        spinner.stop("Missing runtimes");
        cliclack::log::error("Node.js (install from https://nodejs.org)")?;
        anyhow::bail!("Please install the missing runtimes and try again.");
    };

    let version = match parse_runtime_version(raw) {
        Ok(version) => version,
        Err(e) => {
            spinner.stop("Unrecognised runtime");
            return Err(e.into());
        }
    };
    spinner.stop(format!("Detected runtimes: {} ({})", node.name, raw));

    if version.major < MIN_NODE_MAJOR {
        cliclack::log::warning(format!(
            "Node.js {} is older than {}, Playwright may not run",
            version, MIN_NODE_MAJOR
        ))?;
    }

    Ok(())
}

fn create_project(source: &TemplateSource, layers: &[TemplateLayer], target: &Path) -> Result<()> {
    cliclack::log::info(format!(
        "Creating project at {}",
        target.display().to_string().blue().underline()
    ))?;

    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match Materializer::new(source, NodeProbe).materialize(layers, target) {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {} (Node.js {} pinned in {})",
                report.file_count(),
                report.target.display(),
                report.runtime_version,
                PIN_FILE
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            cliclack::log::error(format!("{}", e))?;
            if let ScaffoldError::PartialTarget { target: partial, .. } = &e {
                cliclack::log::warning(format!(
                    "The partially created project was left at {} for inspection",
                    partial.display()
                ))?;
            }
            Err(e.into())
        }
    }
}

async fn install(record: &ConfigurationRecord, target: &Path, skip: bool) -> Result<bool> {
    let dependencies: DependencySet = plan_dependencies(record);

    if skip {
        cliclack::log::info(format!(
            "Skipping installation of {} packages",
            dependencies.len()
        ))?;
        return Ok(false);
    }

    let installer = PackageInstaller::npm();
    for step in [InstallStep::Dependencies, InstallStep::Browsers] {
        let spinner = cliclack::spinner();
        spinner.start(step.progress_message());

        if let Err(e) = installer
            .run(step, dependencies.iter().copied(), target)
            .await
        {
            spinner.stop(format!("{} failed", step.name()));
            cliclack::log::error(format!("{}", e))?;
            return Err(e.into());
        }
        spinner.stop(step.done_message());
    }

    Ok(true)
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    record: &ConfigurationRecord,
    summary: SetupSummary,
) -> Result<()> {
    let steps = config.next_steps(project_dir, record, summary);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("🎉  You're all set!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_is_cancellation() {
        let result: io::Result<bool> = Err(io::ErrorKind::Interrupted.into());
        assert_eq!(answer(result).unwrap(), Answer::Cancelled);
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let result: io::Result<bool> = Err(io::ErrorKind::BrokenPipe.into());
        assert!(matches!(answer(result), Err(ScaffoldError::Io(_))));
    }

    #[test]
    fn test_values_pass_through() {
        assert_eq!(answer(Ok(3)).unwrap(), Answer::Value(3));
    }
}
