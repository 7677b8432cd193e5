//! Package installation for generated projects
//!
//! Runs the package manager as a child process inside the target directory.
//! The two steps always run one after the other: the browser download needs
//! `@playwright/test` to be installed first.

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a single installation step (10 minutes)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// Lines of stderr kept in an error message
const STDERR_TAIL_LINES: usize = 10;

/// An installation step, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    Dependencies,
    Browsers,
}

impl InstallStep {
    pub fn name(&self) -> &'static str {
        match self {
            InstallStep::Dependencies => "Dependency installation",
            InstallStep::Browsers => "Browser installation",
        }
    }

    /// Spinner text while the step runs
    pub fn progress_message(&self) -> &'static str {
        match self {
            InstallStep::Dependencies => "Installing dependencies...",
            InstallStep::Browsers => "Installing Playwright browsers...",
        }
    }

    /// Spinner text once the step succeeded
    pub fn done_message(&self) -> &'static str {
        match self {
            InstallStep::Dependencies => "Dependencies installed",
            InstallStep::Browsers => "Playwright browsers installed",
        }
    }
}

/// A command line ready to be spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallCommand {
    /// Command as a user would type it
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Configuration for the package manager binaries
#[derive(Debug, Clone)]
pub struct PackageInstaller {
    npm: &'static str,
    npx: &'static str,
}

impl Default for PackageInstaller {
    fn default() -> Self {
        Self::npm()
    }
}

impl PackageInstaller {
    /// npm, resolving the Windows shims when needed
    pub fn npm() -> Self {
        if cfg!(windows) {
            Self {
                npm: "npm.cmd",
                npx: "npx.cmd",
            }
        } else {
            Self {
                npm: "npm",
                npx: "npx",
            }
        }
    }

    /// Build the command line for a step
    pub fn command<'a>(
        &self,
        step: InstallStep,
        dependencies: impl IntoIterator<Item = &'a str>,
    ) -> InstallCommand {
        match step {
            InstallStep::Dependencies => {
                let mut args = vec!["install".to_string()];
                args.extend(dependencies.into_iter().map(str::to_string));
                args.push("--save-dev".to_string());
                InstallCommand {
                    program: self.npm.to_string(),
                    args,
                }
            }
            InstallStep::Browsers => InstallCommand {
                program: self.npx.to_string(),
                args: vec!["playwright".to_string(), "install".to_string()],
            },
        }
    }

    /// Run one step in `cwd` and wait for it to finish
    pub async fn run<'a>(
        &self,
        step: InstallStep,
        dependencies: impl IntoIterator<Item = &'a str>,
        cwd: &Path,
    ) -> Result<()> {
        let command = self.command(step, dependencies);
        tracing::info!(step = step.name(), command = %command.display(), "running installer");

        let child = TokioCommand::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ScaffoldError::InstallerFailure {
                step: step.name(),
                reason: format!("could not start `{}`: {}", command.program, e),
            })?;

        let output = match timeout(INSTALL_TIMEOUT, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(ScaffoldError::InstallerFailure {
                    step: step.name(),
                    reason: format!("failed to wait for `{}`: {}", command.display(), e),
                });
            }
            Err(_) => {
                return Err(ScaffoldError::InstallerFailure {
                    step: step.name(),
                    reason: format!(
                        "timed out after {} seconds. Please try running it manually:\n{}",
                        INSTALL_TIMEOUT.as_secs(),
                        command.display()
                    ),
                });
            }
        };

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(ScaffoldError::InstallerFailure {
            step: step.name(),
            reason: format!(
                "`{}` exited with code {}\n{}",
                command.display(),
                output.status.code().unwrap_or(-1),
                stderr_tail(&stderr)
            ),
        })
    }
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
