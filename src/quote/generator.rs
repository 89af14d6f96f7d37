//! The pricing PDF generator seam.
//!
//! Handlers talk to a [`QuoteGenerator`] trait object so tests can substitute
//! the external script with a stub.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use super::invocation::{build_invocation, run_with_timeout};
use super::models::{GeneratedArtifact, Submission};
use super::SubmissionError;
use crate::config::AppConfig;

#[async_trait]
pub trait QuoteGenerator {
    async fn generate(&self, submission: &Submission) -> Result<GeneratedArtifact, SubmissionError>;
}

/// Production generator: runs the external pricing script synchronously with
/// a bounded wait and parses its first output line as the result filename.
pub struct PricingScriptGenerator {
    script: PathBuf,
    template: PathBuf,
    timeout: Duration,
}

impl PricingScriptGenerator {
    pub fn new(script: PathBuf, template: PathBuf, timeout: Duration) -> Self {
        Self {
            script,
            template,
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.generator_script.clone(),
            config.pricing_template.clone(),
            config.generator_timeout,
        )
    }
}

#[async_trait]
impl QuoteGenerator for PricingScriptGenerator {
    async fn generate(&self, submission: &Submission) -> Result<GeneratedArtifact, SubmissionError> {
        let invocation = build_invocation(
            &self.script,
            submission.name(),
            submission.email(),
            &self.template,
        );
        // Arguments carry user input; keep the full command line out of
        // routine logs.
        log::debug!("Executing: {}", invocation.display());

        let output = run_with_timeout(&invocation, self.timeout).await?;

        if output.exit_code != 0 {
            log::error!(
                "Script execution failed with code {}: {}",
                output.exit_code,
                output.lines.join("\n")
            );
            return Err(SubmissionError::GeneratorExit(output.exit_code));
        }

        let first_line = output.lines.first().map(String::as_str).unwrap_or("");
        GeneratedArtifact::parse(first_line)
    }
}
