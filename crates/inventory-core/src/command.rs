//! External command execution.

use std::process::{Command, Output};

use tracing::debug;

use crate::error::{ScanError, ScanResult};

/// How a nonzero exit status is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitMode {
    /// Nonzero exit is reported as [`ScanError::ToolFailed`].
    Strict,
    /// Nonzero exit is accepted and the captured output is returned as-is.
    Lenient,
}

/// Captured result of one finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str], mode: ExitMode) -> ScanResult<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str], mode: ExitMode) -> ScanResult<CommandOutput> {
        (**self).run(program, args, mode)
    }
}

/// Spawns real child processes and blocks until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], mode: ExitMode) -> ScanResult<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ScanError::ToolUnavailable {
                program: program.to_string(),
                source,
            })?;

        let captured = capture(output);
        debug!(
            program,
            ?args,
            exit_code = ?captured.exit_code,
            stdout_bytes = captured.stdout.len(),
            "external command finished"
        );

        check_exit(program, captured, mode)
    }
}

fn capture(output: Output) -> CommandOutput {
    CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    }
}

/// Apply the [`ExitMode`] policy to a captured output.
pub(crate) fn check_exit(
    program: &str,
    output: CommandOutput,
    mode: ExitMode,
) -> ScanResult<CommandOutput> {
    if mode == ExitMode::Strict && !output.success() {
        return Err(ScanError::ToolFailed {
            program: program.to_string(),
            exit_code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed() -> CommandOutput {
        CommandOutput {
            stdout: "en0: flags=8863<UP>\n".to_string(),
            stderr: "  warning  \n".to_string(),
            exit_code: Some(1),
        }
    }

    #[test]
    fn strict_mode_rejects_nonzero_exit() {
        let err = check_exit("ifconfig", failed(), ExitMode::Strict).expect_err("must fail");
        match err {
            ScanError::ToolFailed {
                program,
                exit_code,
                stderr,
            } => {
                assert_eq!(program, "ifconfig");
                assert_eq!(exit_code, Some(1));
                assert_eq!(stderr, "warning");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_mode_keeps_stdout_of_nonzero_exit() {
        let output = check_exit("ifconfig", failed(), ExitMode::Lenient).expect("lenient");
        assert!(output.stdout.contains("en0"));
        assert!(!output.success());
    }

    #[test]
    fn missing_executable_is_tool_unavailable() {
        let err = SystemCommandRunner
            .run("device-scanner-no-such-tool", &[], ExitMode::Strict)
            .expect_err("spawn must fail");
        assert!(matches!(err, ScanError::ToolUnavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_of_real_process() {
        let output = SystemCommandRunner
            .run("sh", &["-c", "echo hello; exit 3"], ExitMode::Lenient)
            .expect("run sh");
        assert_eq!(output.stdout.trim(), "hello");
        assert_eq!(output.exit_code, Some(3));
    }
}
