//! Option catalog for every configuration axis
//!
//! Each axis is a closed enum backed by a static table of [`CatalogEntry`]
//! values. The table is the only place that decides whether a value can be
//! selected, so the wizard and the record constructor both consult it.

use std::fmt;

/// Packages every generated project installs
pub const BASE_DEPENDENCIES: &[&str] = &["@playwright/test", "dotenv", "zod"];

/// Type definitions installed for TypeScript projects
pub const TYPESCRIPT_DEPENDENCIES: &[&str] = &["@types/node"];

/// Packages installed when ESLint is selected
pub const LINT_DEPENDENCIES: &[&str] = &["eslint", "@eslint/js", "eslint-plugin-playwright"];

/// Type-aware lint tooling added on top of [`LINT_DEPENDENCIES`] for TypeScript
pub const TYPED_LINT_DEPENDENCIES: &[&str] = &["typescript-eslint", "globals", "jiti"];

/// Packages installed when Prettier is selected
pub const FORMAT_DEPENDENCIES: &[&str] = &["prettier"];

/// Lint profile used whenever the profile question is not asked
pub const DEFAULT_LINT_PROFILE: LintProfile = LintProfile::Strict;

/// One selectable (or deliberately unselectable) value of a configuration axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<T: 'static> {
    pub value: T,
    /// Stable identifier, also used as the template directory key
    pub key: &'static str,
    pub label: &'static str,
    pub hint: Option<&'static str>,
    pub selectable: bool,
    pub recommended: bool,
}

impl<T: Copy> CatalogEntry<T> {
    const fn new(value: T, key: &'static str, label: &'static str) -> Self {
        Self {
            value,
            key,
            label,
            hint: None,
            selectable: true,
            recommended: false,
        }
    }

    const fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    const fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    const fn disabled(mut self) -> Self {
        self.selectable = false;
        self
    }

    /// Label with its status annotation, e.g. `Page Object Model (recommended)`
    pub fn display_label(&self) -> String {
        if !self.selectable {
            format!("{} (not implemented)", self.label)
        } else if self.recommended {
            format!("{} (recommended)", self.label)
        } else {
            self.label.to_string()
        }
    }
}

/// A configuration axis with a static option table
pub trait CatalogOption: Copy + Eq + fmt::Debug + 'static {
    /// Every known value, selectable or not, in display order
    fn catalog() -> &'static [CatalogEntry<Self>];

    fn entry(self) -> &'static CatalogEntry<Self> {
        Self::catalog()
            .iter()
            .find(|e| e.value == self)
            .unwrap_or_else(|| unreachable!("{self:?} is missing from its catalog"))
    }

    fn key(self) -> &'static str {
        self.entry().key
    }

    fn is_selectable(self) -> bool {
        self.entry().selectable
    }

    /// The options a user may actually pick
    fn selectable() -> Vec<&'static CatalogEntry<Self>> {
        Self::catalog().iter().filter(|e| e.selectable).collect()
    }
}

/// Language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    /// Short key used in layer labels (`ts-base`, `pom-js`, ...)
    pub fn short(self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    pub fn packages(self) -> &'static [&'static str] {
        match self {
            Language::TypeScript => TYPESCRIPT_DEPENDENCIES,
            Language::JavaScript => &[],
        }
    }
}

static LANGUAGES: [CatalogEntry<Language>; 2] = [
    CatalogEntry::new(Language::TypeScript, "typescript", "TypeScript").recommended(),
    CatalogEntry::new(Language::JavaScript, "javascript", "JavaScript"),
];

impl CatalogOption for Language {
    fn catalog() -> &'static [CatalogEntry<Self>] {
        &LANGUAGES
    }
}

/// Action abstraction layer used by generated tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Model {
    PageObject,
    Screenplay,
}

static MODELS: [CatalogEntry<Model>; 2] = [
    CatalogEntry::new(Model::PageObject, "pom", "Page Object Model")
        .hint("behavior-centric pages with parameterised actions")
        .recommended(),
    CatalogEntry::new(Model::Screenplay, "spm", "Screenplay Model").disabled(),
];

impl CatalogOption for Model {
    fn catalog() -> &'static [CatalogEntry<Self>] {
        &MODELS
    }
}

/// Optional code quality tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tool {
    Prettier,
    Eslint,
}

impl Tool {
    pub fn packages(self) -> &'static [&'static str] {
        match self {
            Tool::Prettier => FORMAT_DEPENDENCIES,
            Tool::Eslint => LINT_DEPENDENCIES,
        }
    }
}

static TOOLS: [CatalogEntry<Tool>; 2] = [
    CatalogEntry::new(Tool::Prettier, "prettier", "Prettier").recommended(),
    CatalogEntry::new(Tool::Eslint, "eslint", "ESLint").recommended(),
];

impl CatalogOption for Tool {
    fn catalog() -> &'static [CatalogEntry<Self>] {
        &TOOLS
    }
}

/// ESLint rule set shipped with the eslint layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LintProfile {
    Strict,
    Basic,
}

static LINT_PROFILES: [CatalogEntry<LintProfile>; 2] = [
    CatalogEntry::new(LintProfile::Strict, "strict", "Strict")
        .hint("recommended rules plus validated environment access")
        .recommended(),
    CatalogEntry::new(LintProfile::Basic, "basic", "Basic"),
];

impl CatalogOption for LintProfile {
    fn catalog() -> &'static [CatalogEntry<Self>] {
        &LINT_PROFILES
    }
}

macro_rules! display_via_catalog {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.entry().label)
            }
        })*
    };
}

display_via_catalog!(Language, Model, Tool, LintProfile);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenplay_is_never_selectable() {
        assert!(!Model::Screenplay.is_selectable());
        assert!(Model::selectable()
            .iter()
            .all(|e| e.value != Model::Screenplay));
        assert_eq!(Model::selectable().len(), 1);
    }

    #[test]
    fn test_every_catalog_has_a_selectable_recommended_entry() {
        assert!(Language::catalog().iter().any(|e| e.recommended && e.selectable));
        assert!(Model::catalog().iter().any(|e| e.recommended && e.selectable));
        assert!(LintProfile::catalog().iter().any(|e| e.recommended && e.selectable));
    }

    #[test]
    fn test_default_lint_profile_is_recommended() {
        assert!(DEFAULT_LINT_PROFILE.entry().recommended);
    }

    #[test]
    fn test_keys_match_template_directories() {
        assert_eq!(Language::TypeScript.key(), "typescript");
        assert_eq!(Language::JavaScript.key(), "javascript");
        assert_eq!(Model::PageObject.key(), "pom");
        assert_eq!(LintProfile::Strict.key(), "strict");
        assert_eq!(Tool::Eslint.key(), "eslint");
    }

    #[test]
    fn test_display_label_annotations() {
        assert_eq!(
            Model::PageObject.entry().display_label(),
            "Page Object Model (recommended)"
        );
        assert_eq!(
            Model::Screenplay.entry().display_label(),
            "Screenplay Model (not implemented)"
        );
        assert_eq!(Language::JavaScript.entry().display_label(), "JavaScript");
    }

    #[test]
    fn test_packages_per_option() {
        assert_eq!(Language::TypeScript.packages(), &["@types/node"]);
        assert!(Language::JavaScript.packages().is_empty());
        assert_eq!(Tool::Prettier.packages(), &["prettier"]);
        assert!(Tool::Eslint.packages().contains(&"eslint"));
    }
}
