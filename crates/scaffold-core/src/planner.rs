//! Dependency planning for generated projects

use crate::catalog::{Language, Tool, BASE_DEPENDENCIES, TYPED_LINT_DEPENDENCIES};
use crate::record::ConfigurationRecord;
use std::collections::BTreeSet;

/// Package identifiers handed to the installer, without version pins
pub type DependencySet = BTreeSet<&'static str>;

/// Derive the dev-dependencies a configuration needs
pub fn plan_dependencies(record: &ConfigurationRecord) -> DependencySet {
    let mut deps: DependencySet = BASE_DEPENDENCIES.iter().copied().collect();

    deps.extend(record.language().packages());

    if record.has_tool(Tool::Eslint) {
        deps.extend(Tool::Eslint.packages());
        if record.language() == Language::TypeScript {
            deps.extend(TYPED_LINT_DEPENDENCIES);
        }
    }

    if record.has_tool(Tool::Prettier) {
        deps.extend(Tool::Prettier.packages());
    }

    tracing::debug!(count = deps.len(), "planned dependencies");
    deps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        LintProfile, Model, FORMAT_DEPENDENCIES, LINT_DEPENDENCIES, TYPESCRIPT_DEPENDENCIES,
    };
    use crate::record::ProjectName;

    fn record(language: Language, tools: &[Tool], profile: LintProfile) -> ConfigurationRecord {
        ConfigurationRecord::new(
            ProjectName::new("demo").unwrap(),
            language,
            Model::PageObject,
            tools.iter().copied().collect(),
            profile,
        )
        .unwrap()
    }

    fn contains_all(deps: &DependencySet, group: &[&str]) -> bool {
        group.iter().all(|d| deps.contains(d))
    }

    #[test]
    fn test_base_group_always_present() {
        let deps = plan_dependencies(&record(Language::JavaScript, &[], LintProfile::Strict));
        assert_eq!(deps, BASE_DEPENDENCIES.iter().copied().collect::<DependencySet>());
    }

    #[test]
    fn test_typescript_full_stack() {
        let deps = plan_dependencies(&record(
            Language::TypeScript,
            &[Tool::Eslint, Tool::Prettier],
            LintProfile::Strict,
        ));

        assert!(contains_all(&deps, BASE_DEPENDENCIES));
        assert!(contains_all(&deps, TYPESCRIPT_DEPENDENCIES));
        assert!(contains_all(&deps, LINT_DEPENDENCIES));
        assert!(contains_all(&deps, TYPED_LINT_DEPENDENCIES));
        assert!(contains_all(&deps, FORMAT_DEPENDENCIES));
    }

    #[test]
    fn test_javascript_lint_has_no_type_aware_extension() {
        let deps = plan_dependencies(&record(
            Language::JavaScript,
            &[Tool::Eslint],
            LintProfile::Basic,
        ));

        assert!(contains_all(&deps, LINT_DEPENDENCIES));
        assert!(!deps.contains("typescript-eslint"));
        assert!(!deps.contains("@types/node"));
    }

    #[test]
    fn test_planning_is_idempotent() {
        let r = record(Language::TypeScript, &[Tool::Prettier], LintProfile::Basic);
        assert_eq!(plan_dependencies(&r), plan_dependencies(&r));
    }

    #[test]
    fn test_adding_eslint_only_adds() {
        for language in [Language::TypeScript, Language::JavaScript] {
            for base_tools in [&[][..], &[Tool::Prettier][..]] {
                let without = plan_dependencies(&record(language, base_tools, LintProfile::Strict));
                let mut with_tools = base_tools.to_vec();
                with_tools.push(Tool::Eslint);
                let with = plan_dependencies(&record(language, &with_tools, LintProfile::Strict));

                assert!(without.is_subset(&with));
                let added: DependencySet = with.difference(&without).copied().collect();
                let mut expected: DependencySet = LINT_DEPENDENCIES.iter().copied().collect();
                if language == Language::TypeScript {
                    expected.extend(TYPED_LINT_DEPENDENCIES);
                }
                assert_eq!(added, expected);
            }
        }
    }

    #[test]
    fn test_lint_profile_ignored_without_eslint() {
        let strict = plan_dependencies(&record(Language::TypeScript, &[], LintProfile::Strict));
        let basic = plan_dependencies(&record(Language::TypeScript, &[], LintProfile::Basic));
        assert_eq!(strict, basic);
    }
}
