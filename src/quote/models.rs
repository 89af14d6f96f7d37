use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use super::sanitize;
use super::SubmissionError;

/// Raw form body of POST /pricing. Missing fields decode as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A sanitized submission. Can only be obtained through [`Submission::parse`],
/// so holding one means both fields are non-empty and filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
}

impl Submission {
    pub fn parse(request: QuoteRequest) -> Result<Self, SubmissionError> {
        let name = sanitize::sanitize_name(&request.name)?;
        let email = sanitize::validate_email(&request.email)?;
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

lazy_static! {
    static ref FILENAME_ALLOWED: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap();
}

/// Filename of a generated pricing PDF, as reported by the generator script.
///
/// The generator is an external collaborator, so its output is not trusted:
/// the filename must be a plain basename with no path separators and nothing
/// outside the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    filename: String,
}

impl GeneratedArtifact {
    pub fn parse(raw: &str) -> Result<Self, SubmissionError> {
        let filename = raw.trim();
        if filename.is_empty() {
            return Err(SubmissionError::EmptyArtifact);
        }
        if !FILENAME_ALLOWED.is_match(filename) {
            return Err(SubmissionError::UnsafeArtifact(filename.to_string()));
        }
        Ok(Self {
            filename: filename.to_string(),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Path the browser is redirected to.
    pub fn public_path(&self) -> String {
        format!("/static/{}", self.filename)
    }
}
