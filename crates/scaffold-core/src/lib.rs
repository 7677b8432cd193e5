//! Scaffold Core - configuration wizard and template composition engine
//!
//! This library walks a user through a short configuration dialogue and
//! materializes a Playwright test framework by overlaying independent
//! template layers onto a fresh directory.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure logic** - option catalog, configuration record, layer
//!   planning and dependency planning; no I/O
//! - **Layer 2: Operations** - the wizard state machine over a [`Prompter`],
//!   template resolution and materialization, runtime probing, installation
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts and the `run`
//!   entry point (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{plan_dependencies, resolve_layers, TemplateSource, Wizard, WizardOutcome};
//! use scaffold_core::wizard::scripted::{ScriptedPrompter, Step};
//!
//! let mut prompter = ScriptedPrompter::new(vec![/* answers */]);
//! if let WizardOutcome::Completed(record) = Wizard::new(".").run(&mut prompter)? {
//!     let layers = resolve_layers(&record, &TemplateSource::embedded())?;
//!     let deps = plan_dependencies(&record);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod planner;
pub mod product;
pub mod project;
pub mod record;
pub mod runtime;
pub mod templates;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{CatalogEntry, CatalogOption, Language, LintProfile, Model, Tool};
pub use error::{NameError, ScaffoldError};
pub use planner::{plan_dependencies, DependencySet};
pub use product::{ProductConfig, SetupSummary};
pub use project::{MaterializeReport, Materializer};
pub use record::{ConfigurationRecord, ProjectName};
pub use templates::{plan_layers, resolve_layers, LayerKind, TemplateLayer, TemplateSource};
pub use wizard::{Answer, Prompter, Wizard, WizardOutcome, WizardState};

#[cfg(feature = "tui")]
pub use tui::run;
