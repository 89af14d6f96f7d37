//! Construction and execution of the external generator invocation.
//!
//! The invocation is a plain argv list handed to the OS without a shell.
//! Every value, user-derived or fixed, occupies exactly one argument slot, so
//! no input content can alter argument boundaries.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use super::SubmissionError;

#[derive(Debug, Clone)]
pub struct ExternalInvocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ExternalInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<OsString>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Rendering for diagnostics. Arguments carry user input, so callers log
    /// this at debug level only.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|arg| format!("{arg:?}")));
        parts.join(" ")
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Invocation of the pricing generator: `<script> <name> <email> <template>`.
pub fn build_invocation(
    script: &Path,
    name: &str,
    email: &str,
    template: &Path,
) -> ExternalInvocation {
    ExternalInvocation::new(script)
        .arg(name)
        .arg(email)
        .arg(template)
}

/// Everything the external process produced, stdout lines first, stderr lines
/// after. The generator contract puts the result filename on the first stdout
/// line and diagnostics everywhere else.
#[derive(Debug)]
pub struct CapturedOutput {
    pub lines: Vec<String>,
    pub exit_code: i32,
}

/// Run the invocation to completion, bounded by `limit`.
///
/// A process that runs past the limit is killed and reported as a timeout.
/// Non-zero exits are not an error here; the caller interprets the exit code.
pub async fn run_with_timeout(
    invocation: &ExternalInvocation,
    limit: Duration,
) -> Result<CapturedOutput, SubmissionError> {
    let mut command = invocation.to_command();
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = command.spawn().map_err(SubmissionError::Spawn)?;

    // kill_on_drop reaps the child when the timeout drops the wait future.
    let output = match tokio::time::timeout(limit, child.wait_with_output()).await {
        Ok(result) => result.map_err(SubmissionError::Spawn)?,
        Err(_) => return Err(SubmissionError::GeneratorTimeout(limit)),
    };

    let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect();
    lines.extend(
        String::from_utf8_lossy(&output.stderr)
            .lines()
            .map(str::to_owned),
    );

    Ok(CapturedOutput {
        lines,
        exit_code: output.status.code().unwrap_or(-1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_each_value_as_one_argument() {
        let invocation = build_invocation(
            Path::new("/opt/gen.sh"),
            "Mario M\u{e4}tas",
            "foo@bar.com; rm -rf /",
            Path::new("/opt/template.pdf"),
        );
        assert_eq!(invocation.program(), Path::new("/opt/gen.sh"));
        assert_eq!(invocation.args().len(), 3);
        assert_eq!(invocation.args()[0], OsString::from("Mario M\u{e4}tas"));
        assert_eq!(invocation.args()[1], OsString::from("foo@bar.com; rm -rf /"));
        assert_eq!(invocation.args()[2], OsString::from("/opt/template.pdf"));
    }

    #[test]
    fn builder_handles_empty_and_quoted_values() {
        let invocation = ExternalInvocation::new("/bin/true")
            .arg("")
            .arg(r#"it's "quoted""#);
        assert_eq!(invocation.args()[0], OsString::from(""));
        assert_eq!(invocation.args()[1], OsString::from(r#"it's "quoted""#));
    }

    #[tokio::test]
    async fn captures_stdout_lines_and_exit_code() {
        let invocation = ExternalInvocation::new("sh")
            .arg("-c")
            .arg("echo report_123.pdf; echo diagnostic info");
        let output = run_with_timeout(&invocation, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.lines, vec!["report_123.pdf", "diagnostic info"]);
    }

    #[tokio::test]
    async fn stderr_is_folded_in_after_stdout() {
        let invocation = ExternalInvocation::new("sh")
            .arg("-c")
            .arg("echo result.pdf; echo warning 1>&2");
        let output = run_with_timeout(&invocation, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(output.lines, vec!["result.pdf", "warning"]);
    }

    #[tokio::test]
    async fn nonzero_exit_is_returned_as_data() {
        let invocation = ExternalInvocation::new("sh").arg("-c").arg("exit 3");
        let output = run_with_timeout(&invocation, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(output.exit_code, 3);
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let invocation = ExternalInvocation::new("/nonexistent/generator.sh");
        let err = run_with_timeout(&invocation, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Spawn(_)));
    }

    #[tokio::test]
    async fn overlong_run_is_killed_and_reported_as_timeout() {
        let invocation = ExternalInvocation::new("sh").arg("-c").arg("sleep 5");
        let err = run_with_timeout(&invocation, Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::GeneratorTimeout(_)));
    }
}
