//! create-playwright-framework - Project scaffolding for Playwright test frameworks

use anyhow::Result;
use clap::{Parser, Subcommand};
use scaffold_core::tui::CreateArgs;
use scaffold_core::{CatalogOption, ConfigurationRecord, ProductConfig, SetupSummary, Tool};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Playwright framework product configuration
#[derive(Clone)]
pub struct PlaywrightFrameworkConfig;

impl ProductConfig for PlaywrightFrameworkConfig {
    fn name(&self) -> &'static str {
        "create-playwright-framework"
    }

    fn display_name(&self) -> &'static str {
        "create-playwright-framework"
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_PLAYWRIGHT_FRAMEWORK_TEMPLATE_DIR"
    }

    fn docs_url(&self) -> &'static str {
        "https://playwright.dev/docs/intro"
    }

    fn next_steps(
        &self,
        dir: &Path,
        record: &ConfigurationRecord,
        summary: SetupSummary,
    ) -> Vec<String> {
        let mut steps = Vec::new();

        // Step 1: Enter (or open) the project
        if summary.editor_available {
            steps.push(format!("code {}", dir.display()));
        }
        steps.push(format!("cd {}", dir.display()));

        // Step 2: Install if it was skipped
        if !summary.installed {
            steps.push("npm install && npx playwright install".to_string());
        }

        // Step 3: Environment
        steps.push("cp .env.example .env.local  (then fill in the values)".to_string());

        // Step 4: Quality tooling
        for tool in record.tools() {
            match tool {
                Tool::Eslint => steps.push("npm run lint".to_string()),
                Tool::Prettier => steps.push("npm run format".to_string()),
            }
        }

        // Step 5: Run the tests
        steps.push("npm test".to_string());

        steps.push(format!(
            "Read the {} docs: {}",
            record.model().entry().label,
            self.docs_url()
        ));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-playwright-framework")]
#[command(about = "CLI for scaffolding Playwright test frameworks")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Playwright test framework
    Create(CliCreateArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Local directory to use for templates instead of the built-in ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Skip installing npm dependencies and Playwright browsers
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            skip_install: args.skip_install,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C outside of prompts (prompts report it as a cancellation)
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();
    let config = PlaywrightFrameworkConfig;

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args,
        // No subcommand provided, default to create behavior (interactive mode)
        None => CliCreateArgs::default(),
    };
    tracing::debug!(?create_args, "starting create");

    let result = scaffold_core::run(&config, create_args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
