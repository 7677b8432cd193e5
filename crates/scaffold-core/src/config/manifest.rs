//! `package.json` for the generated project

use crate::error::Result;
use crate::templates::copier::write_generated;
use serde::Serialize;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

/// Minimal npm package descriptor written before dependencies are installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: &'static str,
    #[serde(rename = "type")]
    pub module_type: &'static str,
    pub scripts: Scripts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    pub test: &'static str,
    #[serde(rename = "test:ui")]
    pub test_ui: &'static str,
    pub lint: &'static str,
    pub format: &'static str,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            test: "playwright test",
            test_ui: "playwright test --ui",
            lint: "eslint",
            format: "prettier . --write --log-level=silent",
        }
    }
}

impl PackageManifest {
    /// Manifest named after the last path segment of `target`
    pub fn for_target(target: &Path) -> Self {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "playwright-framework".to_string());

        Self {
            name,
            version: "1.0.0",
            module_type: "module",
            scripts: Scripts::default(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| std::io::Error::from(e).into())
    }

    /// Write the manifest into `target`; an existing `package.json` is a collision
    pub fn write(&self, target: &Path) -> Result<()> {
        let json = self.to_json()?;
        write_generated(target, MANIFEST_FILE, json.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;

    #[test]
    fn test_name_from_last_segment() {
        let manifest = PackageManifest::for_target(Path::new("/tmp/work/demo"));
        assert_eq!(manifest.name, "demo");
        assert_eq!(manifest.version, "1.0.0");
    }

    #[test]
    fn test_json_shape() {
        let json = PackageManifest::for_target(Path::new("demo")).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "demo");
        assert_eq!(value["type"], "module");
        assert_eq!(value["scripts"]["test"], "playwright test");
        assert_eq!(value["scripts"]["test:ui"], "playwright test --ui");
        assert_eq!(value["scripts"]["lint"], "eslint");
        assert_eq!(
            value["scripts"]["format"],
            "prettier . --write --log-level=silent"
        );
        assert!(json.starts_with("{\n  \"name\""));
    }

    #[test]
    fn test_write_refuses_existing_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(MANIFEST_FILE), "{}").unwrap();

        let err = PackageManifest::for_target(tmp.path())
            .write(tmp.path())
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::CollisionOnMaterialize { .. }));
    }
}
