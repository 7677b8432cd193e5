//! Resolve a configuration record into ordered template layers

use super::source::TemplateSource;
use crate::catalog::{CatalogOption, Language, LintProfile, Model, Tool};
use crate::error::{Result, ScaffoldError};
use crate::record::ConfigurationRecord;
use std::fmt;
use std::path::PathBuf;

/// Logical template layer, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Common,
    LanguageBase(Language),
    ActionModel(Model, Language),
    Eslint(Language, LintProfile),
    Prettier(Language),
}

impl LayerKind {
    /// Logical name used in error messages
    pub fn logical_name(&self) -> &'static str {
        match self {
            LayerKind::Common => "common",
            LayerKind::LanguageBase(_) => "language base",
            LayerKind::ActionModel(..) => "action model",
            LayerKind::Eslint(..) => "eslint",
            LayerKind::Prettier(_) => "prettier",
        }
    }

    /// Directory of the layer, relative to the template root
    pub fn relative_path(&self) -> PathBuf {
        let parts: Vec<&str> = match *self {
            LayerKind::Common => vec!["common"],
            LayerKind::LanguageBase(lang) => vec![lang.key()],
            LayerKind::ActionModel(model, lang) => vec!["models", model.key(), lang.key()],
            LayerKind::Eslint(lang, profile) => vec!["eslint", lang.key(), profile.key()],
            LayerKind::Prettier(lang) => vec!["prettier", lang.key()],
        };
        parts.into_iter().collect()
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LayerKind::Common => write!(f, "common"),
            LayerKind::LanguageBase(lang) => write!(f, "{}-base", lang.short()),
            LayerKind::ActionModel(model, lang) => write!(f, "{}-{}", model.key(), lang.short()),
            LayerKind::Eslint(lang, profile) => {
                write!(f, "eslint-{}-{}", lang.short(), profile.key())
            }
            LayerKind::Prettier(lang) => write!(f, "prettier-{}", lang.short()),
        }
    }
}

/// A layer that was found in the template source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayer {
    pub kind: LayerKind,
    pub path: PathBuf,
}

/// Layers a record needs, in precedence order, without touching any source
pub fn plan_layers(record: &ConfigurationRecord) -> Vec<LayerKind> {
    let language = record.language();
    let mut layers = vec![
        LayerKind::Common,
        LayerKind::LanguageBase(language),
        LayerKind::ActionModel(record.model(), language),
    ];

    if let Some(profile) = record.lint_profile() {
        layers.push(LayerKind::Eslint(language, profile));
    }
    if record.has_tool(Tool::Prettier) {
        layers.push(LayerKind::Prettier(language));
    }

    layers
}

/// Resolve every layer against `source`, failing on the first one that is missing
pub fn resolve_layers(
    record: &ConfigurationRecord,
    source: &TemplateSource,
) -> Result<Vec<TemplateLayer>> {
    plan_layers(record)
        .into_iter()
        .map(|kind| {
            let path = kind.relative_path();
            if !source.has_layer(&path) {
                return Err(ScaffoldError::MissingTemplateLayer {
                    layer: kind.logical_name(),
                    key: kind.to_string(),
                    location: source.location(&path),
                });
            }
            tracing::debug!(layer = %kind, path = %path.display(), "resolved template layer");
            Ok(TemplateLayer { kind, path })
        })
        .collect()
}
