//! External release build invocation

use std::path::Path;
use std::process::Command;

use super::StageError;

/// Run the build `command` in `working_dir` and wait for it
///
/// The build inherits stdout and stderr so its diagnostics reach the
/// terminal directly. No timeout is applied. A non-zero exit is an error.
pub fn run_build(command: &[String], working_dir: &Path) -> Result<(), StageError> {
    let (program, args) = command.split_first().ok_or(StageError::EmptyBuildCommand)?;
    let command_line = command.join(" ");

    log::info!("Running build: {} (in {})", command_line, working_dir.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .status()
        .map_err(|source| StageError::BuildSpawn {
            command: command_line.clone(),
            source,
        })?;

    if !status.success() {
        return Err(StageError::BuildFailed {
            command: command_line,
            status,
        });
    }

    log::debug!("Build finished with {}", status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_empty_command() {
        let dir = tempdir().unwrap();
        let err = run_build(&[], dir.path()).unwrap_err();
        assert!(matches!(err, StageError::EmptyBuildCommand));
    }

    #[test]
    fn test_missing_program() {
        let dir = tempdir().unwrap();
        let err = run_build(&command(&["hot-chickens-no-such-build-tool"]), dir.path()).unwrap_err();
        assert!(matches!(err, StageError::BuildSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_success() {
        let dir = tempdir().unwrap();
        run_build(&command(&["sh", "-c", "exit 0"]), dir.path()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_status() {
        let dir = tempdir().unwrap();
        let err = run_build(&command(&["sh", "-c", "exit 3"]), dir.path()).unwrap_err();

        match err {
            StageError::BuildFailed { command, status } => {
                assert_eq!(command, "sh -c exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("Expected BuildFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_working_dir() {
        let dir = tempdir().unwrap();
        run_build(&command(&["sh", "-c", "echo built > marker"]), dir.path()).unwrap();
        assert!(dir.path().join("marker").is_file());
    }
}
