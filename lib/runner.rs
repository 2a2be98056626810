//! Process invocation seam.
//!
//! Registry removal goes through an external CLI. The invocation is behind a
//! trait so the unpublish flow can be tested without spawning anything.

use std::io;
use std::process::Command;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Exit information from a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Whether the process exited successfully.
    pub success: bool,

    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
}

/// Runs an external program with a fixed argument list.
///
/// Implementations must pass arguments as a list (never through a shell) and
/// inherit the parent's standard streams, so the child's output reaches the
/// invoking terminal untouched.
pub trait CommandRunner {
    /// Run `program` with `args` to completion and report its exit status.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandStatus>;
}

/// A [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandStatus> {
        // Stdio defaults to inherited for `status()`, which is exactly the
        // contract: the child streams straight to the terminal.
        let status = Command::new(program).args(args).status()?;

        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn test_system_runner_reports_success() {
        let status = SystemRunner.run("true", &[]).unwrap();
        assert!(status.success);
        assert_eq!(status.code, Some(0));
    }

    #[test]
    fn test_system_runner_reports_failure() {
        let status = SystemRunner.run("false", &[]).unwrap();
        assert!(!status.success);
        assert_eq!(status.code, Some(1));
    }

    #[test]
    fn test_system_runner_spawn_error() {
        let result = SystemRunner.run("unpub-test-no-such-program", &[]);
        assert!(result.is_err());
    }
}
