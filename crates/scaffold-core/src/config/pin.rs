//! Runtime pin file (`.nvmrc`)

use crate::error::{Result, ScaffoldError};
use crate::templates::copier::write_generated;
use semver::Version;
use std::path::Path;

pub const PIN_FILE: &str = ".nvmrc";

/// Oldest Node.js major Playwright supports; older versions only warn
pub const MIN_NODE_MAJOR: u64 = 18;

/// Normalize a probed version string (`v20.11.1\n` -> `20.11.1`)
pub fn parse_runtime_version(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('v').unwrap_or(trimmed);

    Version::parse(stripped).map_err(|e| {
        ScaffoldError::RuntimeProbeFailure(format!("'{}' is not a version ({})", trimmed, e))
    })
}

/// Contents of the pin file: the bare version and one trailing newline
pub fn pin_contents(version: &Version) -> String {
    format!("{}\n", version)
}

/// Write the pin file into `target`; a template that ships one is a collision
pub fn write_pin_file(target: &Path, version: &Version) -> Result<()> {
    write_generated(target, PIN_FILE, pin_contents(version).as_bytes())
}
