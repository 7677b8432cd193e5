//! Error taxonomy for the scaffolding engine

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a project name is refused by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Project name cannot be empty.")]
    Empty,

    #[error("Project name is too long ({len} characters), the limit is 50.")]
    TooLong { len: usize },

    #[error("Invalid character '{ch}', use only letters, digits and hyphens.")]
    InvalidCharacter { ch: char },

    #[error("'{name}' already exists here, pick a name that is not taken.")]
    AlreadyExists { name: String },
}

/// Errors raised while configuring or materializing a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Validation(#[from] NameError),

    #[error("'{option}' is not available yet and cannot be selected")]
    DisabledOption { option: &'static str },

    #[error("Could not find the {layer} template layer '{key}' at {location}")]
    MissingTemplateLayer {
        layer: &'static str,
        key: String,
        location: String,
    },

    #[error("Template layer '{layer}' would overwrite '{}', which an earlier layer already wrote", .path.display())]
    CollisionOnMaterialize { layer: String, path: PathBuf },

    #[error("Target directory already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("{step} failed: {reason}")]
    InstallerFailure { step: &'static str, reason: String },

    #[error("Could not determine the Node.js version: {0}")]
    RuntimeProbeFailure(String),

    #[error("Scripted input: {0}")]
    Script(String),

    /// Any failure after the target directory was created
    #[error("{source}")]
    PartialTarget {
        target: PathBuf,
        source: Box<ScaffoldError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// The error underneath any [`ScaffoldError::PartialTarget`] wrapping
    pub fn root_cause(&self) -> &ScaffoldError {
        match self {
            ScaffoldError::PartialTarget { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
