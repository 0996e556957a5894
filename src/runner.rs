// Process execution seam

use std::io;
use std::process::{Command, Stdio};

/// Outcome of one dialog invocation: the exit code and whatever the program
/// wrote to its result stream.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,

    /// Captured stdout. With `--stdout` in effect this is the widget's
    /// machine-readable response regardless of widget kind.
    pub stdout: String,
}

impl RunOutput {
    /// Exit status is the sole arbiter of confirmed vs cancelled.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to run the dialog program.
///
/// The widget layer depends only on this trait, never on ambient process
/// spawning, so tests substitute a scripted fake and assert on the argv they
/// receive without ever touching a terminal.
pub trait CommandRunner {
    /// Run `program` with `args`, block until it exits, and capture stdout.
    ///
    /// An `Err` means the process could not be run at all (typically a
    /// missing binary); the caller collapses that into the same "no result"
    /// outcome as a cancel.
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput>;
}

/// The real runner: spawns the program with stdout piped for capture while
/// stdin and stderr stay attached to the terminal, which is where dialog
/// draws its interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let output = child.wait_with_output()?;
        Ok(RunOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}
