//! Runtime detection for Node.js and optional helper commands

use crate::error::{Result, ScaffoldError};
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Source of the active runtime version, used to write the pin file
pub trait RuntimeProbe {
    fn runtime_version(&self) -> Result<String>;
}

/// Probes the `node` binary on PATH
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeProbe;

impl RuntimeProbe for NodeProbe {
    fn runtime_version(&self) -> Result<String> {
        let info = check_node();
        info.version.ok_or_else(|| {
            ScaffoldError::RuntimeProbeFailure("`node -v` did not succeed, is Node.js installed?".into())
        })
    }
}

/// A fixed version, for callers that already know it
#[derive(Debug, Clone)]
pub struct FixedVersion(pub String);

impl RuntimeProbe for FixedVersion {
    fn runtime_version(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    let output = Command::new("node").arg("-v").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "Node.js",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Node.js",
            version: None,
            available: false,
        },
    }
}

/// Whether `command --version` runs successfully
///
/// Any failure means "not available"; this never aborts the run.
pub fn is_command_available(command: &str) -> bool {
    Command::new(command)
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_is_unavailable() {
        assert!(!is_command_available("definitely-not-a-real-command-4f1c"));
    }

    #[test]
    fn test_fixed_version_probe() {
        let probe = FixedVersion("v20.0.0".to_string());
        assert_eq!(probe.runtime_version().unwrap(), "v20.0.0");
    }

    #[test]
    fn test_check_node_reports_consistently() {
        let info = check_node();
        assert_eq!(info.name, "Node.js");
        assert_eq!(info.available, info.version.is_some());
    }
}
