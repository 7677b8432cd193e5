//! Runtime detection and package installation
//!
//! This module provides:
//! - Node.js detection and the runtime version probe used for the pin file
//! - A best-effort check for optional commands such as an editor
//! - The package installer for dependencies and Playwright browsers

pub mod check;
pub mod installer;

pub use check::{check_node, is_command_available, NodeProbe, RuntimeInfo, RuntimeProbe};
pub use installer::{InstallStep, PackageInstaller};
