//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a binary implements to brand the
//! scaffolding flow and describe what the user should do afterwards.

use crate::record::ConfigurationRecord;
use std::path::Path;

/// What the setup did, as far as the closing instructions care
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupSummary {
    /// Dependencies and browsers were installed
    pub installed: bool,
    /// The editor command is on PATH
    pub editor_available: bool,
}

/// Configuration trait for CLI products
///
/// Each product defines:
/// - Product identity (name, display name)
/// - The environment variable that points at a local template directory
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// URL for documentation of the generated project's stack
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(
        &self,
        dir: &Path,
        record: &ConfigurationRecord,
        summary: SetupSummary,
    ) -> Vec<String>;
}
