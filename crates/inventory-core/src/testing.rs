//! Scripted [`CommandRunner`] for exercising parsers without real tools.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use crate::command::{check_exit, CommandOutput, CommandRunner, ExitMode};
use crate::error::{ScanError, ScanResult};

#[derive(Debug, Clone)]
enum Reply {
    Output(CommandOutput),
    Unavailable,
}

/// Serves canned replies keyed by full command line, then by program alone.
///
/// Unscripted commands behave like a missing executable.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `stdout` and exit code 0 for `program` with any arguments.
    pub fn stdout(self, program: &str, stdout: &str) -> Self {
        self.reply(program, Some(0), stdout, "")
    }

    /// Reply with `stdout` and exit code 0 for this exact command line.
    pub fn stdout_for(self, program: &str, args: &[&str], stdout: &str) -> Self {
        let key = command_line(program, args);
        self.reply(&key, Some(0), stdout, "")
    }

    pub fn reply(mut self, key: &str, exit_code: Option<i32>, stdout: &str, stderr: &str) -> Self {
        self.replies.insert(
            key.to_string(),
            Reply::Output(CommandOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                exit_code,
            }),
        );
        self
    }

    pub fn unavailable(mut self, program: &str) -> Self {
        self.replies.insert(program.to_string(), Reply::Unavailable);
        self
    }

    /// Command lines seen so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], mode: ExitMode) -> ScanResult<CommandOutput> {
        let line = command_line(program, args);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line.clone());
        }

        let reply = self
            .replies
            .get(&line)
            .or_else(|| self.replies.get(program))
            .cloned()
            .unwrap_or(Reply::Unavailable);

        match reply {
            Reply::Output(output) => check_exit(program, output, mode),
            Reply::Unavailable => Err(ScanError::ToolUnavailable {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not scripted"),
            }),
        }
    }
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
