//! The configuration record produced by the wizard

use crate::catalog::{CatalogOption, Language, LintProfile, Model, Tool};
use crate::error::{NameError, Result, ScaffoldError};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Longest accepted project name, in characters
pub const MAX_NAME_LEN: usize = 50;

/// A project name that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate the shape of a name without touching the filesystem
    pub fn new(input: &str) -> Result<Self, NameError> {
        if input.trim().is_empty() {
            return Err(NameError::Empty);
        }

        let len = input.chars().count();
        if len > MAX_NAME_LEN {
            return Err(NameError::TooLong { len });
        }

        if let Some(ch) = input
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            return Err(NameError::InvalidCharacter { ch });
        }

        Ok(Self(input.to_string()))
    }

    /// Validate the name and require that `base_dir` has no entry with that name
    pub fn parse(input: &str, base_dir: &Path) -> Result<Self, NameError> {
        let name = Self::new(input)?;
        if base_dir.join(&name.0).exists() {
            return Err(NameError::AlreadyExists { name: name.0 });
        }
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validator used by the name prompt; the message is what the user sees
pub fn validate_project_name(input: &str, base_dir: &Path) -> std::result::Result<(), String> {
    ProjectName::parse(input, base_dir)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Immutable answers of one wizard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    project_name: ProjectName,
    language: Language,
    model: Model,
    tools: BTreeSet<Tool>,
    lint_profile: LintProfile,
}

impl ConfigurationRecord {
    /// Build a record, refusing any option the catalog marks as unselectable
    pub fn new(
        project_name: ProjectName,
        language: Language,
        model: Model,
        tools: BTreeSet<Tool>,
        lint_profile: LintProfile,
    ) -> Result<Self> {
        if !model.is_selectable() {
            return Err(ScaffoldError::DisabledOption {
                option: model.entry().label,
            });
        }
        if !language.is_selectable() {
            return Err(ScaffoldError::DisabledOption {
                option: language.entry().label,
            });
        }
        if let Some(tool) = tools.iter().find(|t| !t.is_selectable()) {
            return Err(ScaffoldError::DisabledOption {
                option: tool.entry().label,
            });
        }

        Ok(Self {
            project_name,
            language,
            model,
            tools,
            lint_profile,
        })
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn tools(&self) -> &BTreeSet<Tool> {
        &self.tools
    }

    pub fn has_tool(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }

    /// The stored profile, which may be the unprompted default
    pub fn stored_lint_profile(&self) -> LintProfile {
        self.lint_profile
    }

    /// The lint profile downstream components may act on
    ///
    /// `None` unless ESLint is part of the tool set, so a default profile
    /// stored for a project without ESLint never reaches generated output.
    pub fn lint_profile(&self) -> Option<LintProfile> {
        self.has_tool(Tool::Eslint).then_some(self.lint_profile)
    }

    /// Where the project is created, relative to `base_dir`
    pub fn target_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.project_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_LINT_PROFILE;

    #[test]
    fn test_accepts_valid_names() {
        let longest = "x".repeat(MAX_NAME_LEN);
        for name in ["demo", "a", "my-framework-2", longest.as_str(), "ABC-def-123"] {
            assert!(ProjectName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(ProjectName::new(""), Err(NameError::Empty));
        assert_eq!(ProjectName::new("   "), Err(NameError::Empty));
        assert_eq!(ProjectName::new("\t\n"), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_long_names() {
        assert_eq!(
            ProjectName::new(&"a".repeat(51)),
            Err(NameError::TooLong { len: 51 })
        );
    }

    #[test]
    fn test_rejects_characters_outside_class() {
        for (input, ch) in [
            ("my_project", '_'),
            ("my project", ' '),
            ("../escape", '.'),
            ("naïve", 'ï'),
            ("a/b", '/'),
        ] {
            assert_eq!(
                ProjectName::new(input),
                Err(NameError::InvalidCharacter { ch })
            );
        }
    }

    #[test]
    fn test_rejects_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("taken")).unwrap();

        assert_eq!(
            ProjectName::parse("taken", tmp.path()),
            Err(NameError::AlreadyExists {
                name: "taken".to_string()
            })
        );
        assert!(ProjectName::parse("free", tmp.path()).is_ok());
    }

    #[test]
    fn test_rejects_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("notes"), "").unwrap();

        let message = validate_project_name("notes", tmp.path()).unwrap_err();
        assert!(message.contains("'notes' already exists"));
        assert!(!message.contains("directory"));
    }

    #[test]
    fn test_validator_messages_differ_per_rule() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("taken")).unwrap();

        let empty = validate_project_name("", tmp.path()).unwrap_err();
        let invalid = validate_project_name("bad name", tmp.path()).unwrap_err();
        let exists = validate_project_name("taken", tmp.path()).unwrap_err();

        assert_ne!(empty, invalid);
        assert_ne!(invalid, exists);
        assert_ne!(empty, exists);
    }

    #[test]
    fn test_record_refuses_disabled_model() {
        let err = ConfigurationRecord::new(
            ProjectName::new("demo").unwrap(),
            Language::TypeScript,
            Model::Screenplay,
            BTreeSet::new(),
            DEFAULT_LINT_PROFILE,
        )
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::DisabledOption { .. }));
    }

    #[test]
    fn test_lint_profile_hidden_without_eslint() {
        let record = ConfigurationRecord::new(
            ProjectName::new("demo").unwrap(),
            Language::TypeScript,
            Model::PageObject,
            BTreeSet::from([Tool::Prettier]),
            LintProfile::Basic,
        )
        .unwrap();

        assert_eq!(record.stored_lint_profile(), LintProfile::Basic);
        assert_eq!(record.lint_profile(), None);
    }

    #[test]
    fn test_target_dir_joins_name() {
        let record = ConfigurationRecord::new(
            ProjectName::new("demo").unwrap(),
            Language::JavaScript,
            Model::PageObject,
            BTreeSet::from([Tool::Eslint]),
            LintProfile::Basic,
        )
        .unwrap();

        assert_eq!(record.lint_profile(), Some(LintProfile::Basic));
        assert_eq!(
            record.target_dir(Path::new("/work")),
            PathBuf::from("/work/demo")
        );
    }
}
