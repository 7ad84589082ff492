//! Background shell activity
//!
//! Lets a test change the world underneath the application, e.g. edit a
//! file while a list is on screen, to emulate concurrent external activity.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::DriverError;

/// Runs `sh -c` commands and file edits relative to a working directory
#[derive(Debug, Clone)]
pub struct Shell {
    dir: PathBuf,
}

impl Shell {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Run `command` to completion and return its stdout.
    ///
    /// A non-zero exit is an error carrying stderr.
    pub fn run_command(&self, command: &str) -> Result<String, DriverError> {
        tracing::debug!(command, dir = ?self.dir, "running shell command");

        let output = Command::new("sh")
            .args(["-c", command])
            .current_dir(&self.dir)
            .output()
            .map_err(|e| DriverError::Shell {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(DriverError::Shell {
                command: command.to_string(),
                reason: format!(
                    "exit status {:?}: {}",
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Create `path` (and its parent directories) with `content`
    pub fn create_file(&self, path: &str, content: &str) -> Result<(), DriverError> {
        let full = self.dir.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error("mkdir", path, e))?;
        }
        std::fs::write(&full, content).map_err(|e| self.io_error("write", path, e))
    }

    /// Overwrite an existing file
    pub fn update_file(&self, path: &str, content: &str) -> Result<(), DriverError> {
        let full = self.dir.join(path);
        if !full.exists() {
            return Err(DriverError::Shell {
                command: format!("update {path}"),
                reason: "file does not exist".to_string(),
            });
        }
        std::fs::write(&full, content).map_err(|e| self.io_error("write", path, e))
    }

    pub fn delete_file(&self, path: &str) -> Result<(), DriverError> {
        std::fs::remove_file(self.dir.join(path)).map_err(|e| self.io_error("rm", path, e))
    }

    fn io_error(&self, op: &str, path: &str, e: std::io::Error) -> DriverError {
        DriverError::Shell {
            command: format!("{op} {path}"),
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_command_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new(dir.path());
        assert_eq!(shell.dir(), dir.path());

        shell.create_file("nested/a.txt", "hello").unwrap();
        assert!(shell.dir().join("nested/a.txt").exists());
        let out = shell.run_command("cat nested/a.txt").unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn failing_command_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new(dir.path());

        let err = shell.run_command("echo oops >&2; exit 3").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("exit status Some(3)"), "{text}");
        assert!(text.contains("oops"), "{text}");
    }

    #[test]
    fn update_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new(dir.path());

        assert!(shell.update_file("missing.txt", "x").is_err());
        shell.create_file("present.txt", "x").unwrap();
        shell.update_file("present.txt", "y").unwrap();
        assert_eq!(shell.run_command("cat present.txt").unwrap(), "y");

        shell.delete_file("present.txt").unwrap();
        assert!(!dir.path().join("present.txt").exists());
    }
}
