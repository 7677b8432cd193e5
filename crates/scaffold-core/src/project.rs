//! Project materialization
//!
//! Applies resolved template layers onto a fresh directory, then writes the
//! runtime pin file and the package manifest. Nothing is rolled back on
//! failure: a partially written directory is left for inspection.

use crate::config::{manifest::PackageManifest, pin};
use crate::error::{Result, ScaffoldError};
use crate::runtime::check::RuntimeProbe;
use crate::templates::{copy_layer, TemplateLayer, TemplateSource};
use semver::Version;
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by one layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedLayer {
    pub label: String,
    pub files: Vec<PathBuf>,
}

/// Outcome of a successful materialization
#[derive(Debug, Clone)]
pub struct MaterializeReport {
    pub target: PathBuf,
    pub layers: Vec<AppliedLayer>,
    pub runtime_version: Version,
}

impl MaterializeReport {
    /// Total number of files written, including the pin file and manifest
    pub fn file_count(&self) -> usize {
        self.layers.iter().map(|l| l.files.len()).sum::<usize>() + 2
    }
}

/// Applies template layers from one source onto a target directory
pub struct Materializer<'a, P: RuntimeProbe> {
    source: &'a TemplateSource,
    probe: P,
}

impl<'a, P: RuntimeProbe> Materializer<'a, P> {
    pub fn new(source: &'a TemplateSource, probe: P) -> Self {
        Self { source, probe }
    }

    /// Create `target` and apply `layers` in order
    ///
    /// `target` must not exist yet. Every failure after the directory was
    /// created comes back as [`ScaffoldError::PartialTarget`]; a file one layer
    /// would overwrite surfaces underneath it as
    /// [`ScaffoldError::CollisionOnMaterialize`].
    pub fn materialize(
        &self,
        layers: &[TemplateLayer],
        target: &Path,
    ) -> Result<MaterializeReport> {
        if target.exists() {
            return Err(ScaffoldError::TargetExists(target.to_path_buf()));
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir(target)?;

        self.populate(layers, target)
            .map_err(|e| ScaffoldError::PartialTarget {
                target: target.to_path_buf(),
                source: Box::new(e),
            })
    }

    fn populate(&self, layers: &[TemplateLayer], target: &Path) -> Result<MaterializeReport> {
        let mut applied = Vec::with_capacity(layers.len());
        for layer in layers {
            let files = copy_layer(self.source, layer, target)?;
            tracing::debug!(layer = %layer.kind, files = files.len(), "applied template layer");
            applied.push(AppliedLayer {
                label: layer.kind.to_string(),
                files,
            });
        }

        let runtime_version = pin::parse_runtime_version(&self.probe.runtime_version()?)?;
        pin::write_pin_file(target, &runtime_version)?;

        PackageManifest::for_target(target).write(target)?;

        Ok(MaterializeReport {
            target: target.to_path_buf(),
            layers: applied,
            runtime_version,
        })
    }
}
