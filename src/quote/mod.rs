//! Pricing quote pipeline.
//!
//! A POST to /pricing flows through this module: the form fields are
//! sanitized, an invocation of the external generator script is built and
//! executed, and the browser is redirected to the PDF the script produced.

pub mod generator;
pub mod handlers;
pub mod invocation;
pub mod models;
pub mod sanitize;

pub use generator::{PricingScriptGenerator, QuoteGenerator};
pub use models::{GeneratedArtifact, QuoteRequest, Submission};

use std::time::Duration;

use thiserror::Error;

/// Errors that can end a quote submission. All are terminal for the request;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("name is empty after sanitization")]
    InvalidName,
    #[error("email is empty after filtering")]
    EmptyEmail,
    #[error("email contains characters outside the allowed set")]
    InvalidEmail,
    #[error("failed to start pricing generator: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("pricing generator exited with status {0}")]
    GeneratorExit(i32),
    #[error("pricing generator timed out after {0:?}")]
    GeneratorTimeout(Duration),
    #[error("pricing generator did not return a filename")]
    EmptyArtifact,
    #[error("pricing generator returned an unsafe filename: {0:?}")]
    UnsafeArtifact(String),
}
