//! Configuration wizard
//!
//! A small state machine over the prompt steps:
//!
//! ```text
//! Name -> Language -> Model -> Tools -> LintProfile -> Done
//!            ^  |                ^  |
//!            |  v                |  v
//!      ConfirmLanguage      ConfirmNoTools
//! ```
//!
//! Every prompt may answer with [`Answer::Cancelled`], which moves straight
//! to [`WizardState::Cancelled`]. Declining either confirmation clears the
//! rendered lines and goes back to the question it guards. There is no retry
//! cap: a human decides when to stop, and tests drive the machine with a
//! finite [`ScriptedPrompter`].

pub mod prompter;
pub mod scripted;

pub use prompter::{Answer, Prompter, Validator};
pub use scripted::ScriptedPrompter;

use crate::catalog::{
    CatalogEntry, CatalogOption, Language, LintProfile, Model, Tool, DEFAULT_LINT_PROFILE,
};
use crate::error::{Result, ScaffoldError};
use crate::record::{validate_project_name, ConfigurationRecord, ProjectName};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Lines erased before a guarded question is asked again
pub const RETRY_CLEAR_LINES: usize = 6;

pub const NAME_PROMPT: &str = "What is your project named?";
pub const NAME_PLACEHOLDER: &str = "my-framework-name";
pub const LANGUAGE_PROMPT: &str = "Which language would you like to use?";
pub const CONFIRM_LANGUAGE_PROMPT: &str =
    "Are you sure? It's highly recommended that you use TypeScript for type safety and linting";
pub const MODEL_PROMPT: &str = "Which action abstraction layer would you like to use?";
pub const TOOLS_PROMPT: &str = "Which tools would you like to add? (use space to select options)";
pub const CONFIRM_NO_TOOLS_PROMPT: &str = "Are you sure? Prettier and ESLint help ensure consistent, \
     high-quality code formatting and catch common issues early.";
pub const LINT_PROFILE_PROMPT: &str = "Which ESLint rule configuration would you like to use?";

/// Prompt steps plus the two terminal states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Name,
    Language,
    ConfirmLanguage,
    Model,
    Tools,
    ConfirmNoTools,
    LintProfile,
    Done,
    Cancelled,
}

impl WizardState {
    pub fn is_terminal(self) -> bool {
        matches!(self, WizardState::Done | WizardState::Cancelled)
    }
}

/// How a wizard run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed(ConfigurationRecord),
    Cancelled,
}

/// Answers collected so far
#[derive(Debug, Default)]
struct Draft {
    project_name: Option<ProjectName>,
    language: Option<Language>,
    model: Option<Model>,
    tools: Option<BTreeSet<Tool>>,
    /// Set when the user confirmed an empty tool set
    skipping_quality_tools: bool,
    lint_profile: Option<LintProfile>,
}

impl Draft {
    fn finish(self) -> Result<ConfigurationRecord> {
        let missing =
            |field: &str| ScaffoldError::Script(format!("wizard finished without {field}"));

        ConfigurationRecord::new(
            self.project_name.ok_or_else(|| missing("a project name"))?,
            self.language.ok_or_else(|| missing("a language"))?,
            self.model.ok_or_else(|| missing("a model"))?,
            self.tools.ok_or_else(|| missing("a tool selection"))?,
            self.lint_profile.unwrap_or(DEFAULT_LINT_PROFILE),
        )
    }
}

/// Drives the prompt sequence and produces one [`ConfigurationRecord`]
#[derive(Debug)]
pub struct Wizard {
    base_dir: PathBuf,
    state: WizardState,
    draft: Draft,
}

impl Wizard {
    /// `base_dir` is where the project directory will be created
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            state: WizardState::Name,
            draft: Draft::default(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Run until the user finishes or cancels
    pub fn run<P: Prompter>(mut self, prompter: &mut P) -> Result<WizardOutcome> {
        while !self.state.is_terminal() {
            self.state = self.step(prompter)?;
            tracing::debug!(state = ?self.state, "wizard transition");
        }

        match self.state {
            WizardState::Cancelled => Ok(WizardOutcome::Cancelled),
            _ => self.draft.finish().map(WizardOutcome::Completed),
        }
    }

    /// Ask the question for the current state and return the next state
    pub fn step<P: Prompter>(&mut self, prompter: &mut P) -> Result<WizardState> {
        match self.state {
            WizardState::Name => self.ask_name(prompter),
            WizardState::Language => self.ask_language(prompter),
            WizardState::ConfirmLanguage => self.confirm_language(prompter),
            WizardState::Model => self.ask_model(prompter),
            WizardState::Tools => self.ask_tools(prompter),
            WizardState::ConfirmNoTools => self.confirm_no_tools(prompter),
            WizardState::LintProfile => self.ask_lint_profile(prompter),
            terminal => Ok(terminal),
        }
    }

    fn ask_name<P: Prompter>(&mut self, prompter: &mut P) -> Result<WizardState> {
        let base_dir = self.base_dir.clone();
        let validator: Validator =
            Box::new(move |input: &str| validate_project_name(input, &base_dir));

        let Answer::Value(input) = prompter.text(NAME_PROMPT, NAME_PLACEHOLDER, validator)? else {
            return Ok(WizardState::Cancelled);
        };

        // The prompter validates too, but the record must never hold a bad name
        match ProjectName::parse(&input, &self.base_dir) {
            Ok(name) => {
                self.draft.project_name = Some(name);
                Ok(WizardState::Language)
            }
            Err(e) => {
                prompter.warn(&e.to_string())?;
                Ok(WizardState::Name)
            }
        }
    }

    fn ask_language<P: Prompter>(&mut self, prompter: &mut P) -> Result<WizardState> {
        let Answer::Value(language) = prompter.select(LANGUAGE_PROMPT, Language::catalog())? else {
            return Ok(WizardState::Cancelled);
        };
        if refuse_disabled(prompter, language)? {
            return Ok(WizardState::Language);
        }

        self.draft.language = Some(language);
        if language.entry().recommended {
            Ok(WizardState::Model)
        } else {
            Ok(WizardState::ConfirmLanguage)
        }
    }

    fn confirm_language<P: Prompter>(&mut self, prompter: &mut P) -> Result<WizardState> {
        let Answer::Value(confirmed) = prompter.confirm(CONFIRM_LANGUAGE_PROMPT, false)? else {
            return Ok(WizardState::Cancelled);
        };

        if confirmed {
            return Ok(WizardState::Model);
        }
        self.draft.language = None;
        prompter.clear_lines(RETRY_CLEAR_LINES)?;
        Ok(WizardState::Language)
    }

    fn ask_model<P: Prompter>(&mut self, prompter: &mut P) -> Result<WizardState> {
        let Answer::Value(model) = prompter.select(MODEL_PROMPT, Model::catalog())? else {
            return Ok(WizardState::Cancelled);
        };
        if refuse_disabled(prompter, model)? {
            return Ok(WizardState::Model);
        }

        self.draft.model = Some(model);
        Ok(WizardState::Tools)
    }

    fn ask_tools<P: Prompter>(&mut self, prompter: &mut P) -> Result<WizardState> {
        let Answer::Value(tools) = prompter.multiselect(TOOLS_PROMPT, Tool::catalog())? else {
            return Ok(WizardState::Cancelled);
        };
        for tool in &tools {
            if refuse_disabled(prompter, *tool)? {
                return Ok(WizardState::Tools);
            }
        }

        if tools.is_empty() {
            return Ok(WizardState::ConfirmNoTools);
        }
        self.draft.tools = Some(tools.into_iter().collect());
        self.draft.skipping_quality_tools = false;
        Ok(WizardState::LintProfile)
    }

    fn confirm_no_tools<P: Prompter>(&mut self, prompter: &mut P) -> Result<WizardState> {
        let Answer::Value(confirmed) = prompter.confirm(CONFIRM_NO_TOOLS_PROMPT, false)? else {
            return Ok(WizardState::Cancelled);
        };

        if confirmed {
            self.draft.tools = Some(BTreeSet::new());
            self.draft.skipping_quality_tools = true;
            return Ok(WizardState::LintProfile);
        }
        prompter.clear_lines(RETRY_CLEAR_LINES)?;
        Ok(WizardState::Tools)
    }

    fn ask_lint_profile<P: Prompter>(&mut self, prompter: &mut P) -> Result<WizardState> {
        let wants_eslint = self
            .draft
            .tools
            .as_ref()
            .is_some_and(|t| t.contains(&Tool::Eslint));

        if self.draft.skipping_quality_tools || !wants_eslint {
            self.draft.lint_profile = Some(DEFAULT_LINT_PROFILE);
            return Ok(WizardState::Done);
        }

        let Answer::Value(profile) = prompter.select(LINT_PROFILE_PROMPT, LintProfile::catalog())?
        else {
            return Ok(WizardState::Cancelled);
        };
        if refuse_disabled(prompter, profile)? {
            return Ok(WizardState::LintProfile);
        }

        self.draft.lint_profile = Some(profile);
        Ok(WizardState::Done)
    }
}

/// Warn about and report an option the catalog does not allow
fn refuse_disabled<P: Prompter, T: CatalogOption>(prompter: &mut P, value: T) -> Result<bool> {
    if value.is_selectable() {
        return Ok(false);
    }
    let entry: &CatalogEntry<T> = value.entry();
    prompter.warn(&format!("{} is not available yet, please pick another option.", entry.label))?;
    Ok(true)
}
