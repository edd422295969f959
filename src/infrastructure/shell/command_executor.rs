//! Running a generated app's setup commands (`npm install` and the like)

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::generation::GenerationError;

/// Runs one setup command inside a generated app
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` with `working_dir` as its current directory. An error
    /// means the command could not be started; a non-zero exit is reported
    /// through [`CommandOutput`].
    async fn execute(
        &self,
        command: &str,
        working_dir: &Path,
    ) -> Result<CommandOutput, GenerationError>;
}

/// What a finished command reported, with surrounding whitespace trimmed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutput {
    /// `None` when the process was ended by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs commands through the platform shell.
///
/// Stdin is closed so an installer that prompts fails instead of waiting
/// forever, and the child is killed if the scaffold run is dropped.
#[derive(Debug, Default)]
pub struct ShellCommandExecutor;

impl ShellCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut shell = Command::new("cmd");
    shell.args(["/C", command]);
    shell
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut shell = Command::new("sh");
    shell.args(["-c", command]);
    shell
}

fn captured(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

#[async_trait]
impl CommandExecutor for ShellCommandExecutor {
    async fn execute(
        &self,
        command: &str,
        working_dir: &Path,
    ) -> Result<CommandOutput, GenerationError> {
        let output = shell(command)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| GenerationError::CommandSpawn {
                command: command.to_string(),
                working_dir: working_dir.to_path_buf(),
                source,
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: captured(&output.stdout),
            stderr: captured(&output.stderr),
        })
    }
}

/// Test double: every command succeeds unless scripted otherwise, and every
/// invocation is recorded
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedCommandExecutor {
    outputs: std::collections::HashMap<String, CommandOutput>,
    unstartable: Vec<String>,
    calls: std::sync::Mutex<Vec<(String, std::path::PathBuf)>>,
}

#[cfg(test)]
impl ScriptedCommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// `command` exits with `exit_code` and prints `stderr`
    pub fn failing(mut self, command: &str, exit_code: i32, stderr: &str) -> Self {
        self.outputs.insert(
            command.to_string(),
            CommandOutput {
                exit_code: Some(exit_code),
                stderr: stderr.to_string(),
                ..Default::default()
            },
        );
        self
    }

    /// `command` cannot be started at all
    pub fn unstartable(mut self, command: &str) -> Self {
        self.unstartable.push(command.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, std::path::PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl CommandExecutor for ScriptedCommandExecutor {
    async fn execute(
        &self,
        command: &str,
        working_dir: &Path,
    ) -> Result<CommandOutput, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), working_dir.to_path_buf()));

        if self.unstartable.iter().any(|c| c == command) {
            return Err(GenerationError::CommandSpawn {
                command: command.to_string(),
                working_dir: working_dir.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        Ok(self.outputs.get(command).cloned().unwrap_or(CommandOutput {
            exit_code: Some(0),
            ..Default::default()
        }))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_runs_in_generated_app_and_trims_output() {
        let app = tempdir().unwrap();
        std::fs::write(app.path().join("package.json"), "{}").unwrap();

        let output = ShellCommandExecutor::new()
            .execute("ls; echo '  warn  ' >&2", app.path())
            .await
            .unwrap();

        assert!(output.succeeded());
        assert_eq!(output.stdout, "package.json");
        assert_eq!(output.stderr, "warn");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported_not_raised() {
        let app = tempdir().unwrap();

        let output = ShellCommandExecutor::new()
            .execute("echo missing script >&2; exit 3", app.path())
            .await
            .unwrap();

        assert!(!output.succeeded());
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stderr, "missing script");
    }

    #[tokio::test]
    async fn test_prompting_command_does_not_wait_for_input() {
        let app = tempdir().unwrap();

        let output = ShellCommandExecutor::new()
            .execute("read answer || echo no input", app.path())
            .await
            .unwrap();

        assert_eq!(output.stdout, "no input");
    }

    #[tokio::test]
    async fn test_missing_working_dir_names_command_and_dir() {
        let app = tempdir().unwrap();
        let missing = app.path().join("not-generated");

        let error = ShellCommandExecutor::new()
            .execute("npm install", &missing)
            .await
            .unwrap_err();

        match error {
            GenerationError::CommandSpawn {
                command,
                working_dir,
                ..
            } => {
                assert_eq!(command, "npm install");
                assert_eq!(working_dir, missing);
            }
            other => panic!("Expected CommandSpawn, got {:?}", other),
        }
    }
}
