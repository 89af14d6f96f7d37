//! End-to-end tests of the script-backed generator against real child
//! processes, using throwaway shell scripts as stand-ins for the pricing
//! generator.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sewercide_web::quote::{
    PricingScriptGenerator, QuoteGenerator, QuoteRequest, Submission, SubmissionError,
};

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("generate-personal-pricing.sh");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn generator(script: PathBuf) -> PricingScriptGenerator {
    PricingScriptGenerator::new(
        script,
        PathBuf::from("/tmp/pricing-template.pdf"),
        Duration::from_secs(5),
    )
}

fn submission(name: &str, email: &str) -> Submission {
    Submission::parse(QuoteRequest {
        name: name.to_string(),
        email: email.to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn first_output_line_becomes_the_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "echo report_123.pdf\necho diagnostic info");

    let artifact = generator(script)
        .generate(&submission("Mario", "mario@example.com"))
        .await
        .unwrap();

    assert_eq!(artifact.filename(), "report_123.pdf");
    assert_eq!(artifact.public_path(), "/static/report_123.pdf");
}

#[tokio::test]
async fn arguments_arrive_as_discrete_tokens() {
    let dir = tempfile::tempdir().unwrap();
    // The script reports its own argument count; an injection that split an
    // argument would change it.
    let script = write_script(dir.path(), r#"echo "args_$#.pdf""#);

    let artifact = generator(script)
        .generate(&submission("Mario M\u{e4}tas", "foo@bar.com; rm -rf /"))
        .await
        .unwrap();

    assert_eq!(artifact.filename(), "args_3.pdf");
}

#[tokio::test]
async fn nonzero_exit_fails_the_submission() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "echo broken template 1>&2\nexit 3");

    let err = generator(script)
        .generate(&submission("Mario", "mario@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::GeneratorExit(3)));
}

#[tokio::test]
async fn empty_output_fails_the_submission() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "exit 0");

    let err = generator(script)
        .generate(&submission("Mario", "mario@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::EmptyArtifact));
}

#[tokio::test]
async fn traversal_filename_from_the_script_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "echo ../../etc/passwd");

    let err = generator(script)
        .generate(&submission("Mario", "mario@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::UnsafeArtifact(_)));
}

#[tokio::test]
async fn missing_script_fails_to_spawn() {
    let err = generator(PathBuf::from("/nonexistent/generate-personal-pricing.sh"))
        .generate(&submission("Mario", "mario@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::Spawn(_)));
}

#[tokio::test]
async fn hung_script_is_killed_after_the_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "sleep 5");

    let generator = PricingScriptGenerator::new(
        script,
        PathBuf::from("/tmp/pricing-template.pdf"),
        Duration::from_millis(200),
    );
    let err = generator
        .generate(&submission("Mario", "mario@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::GeneratorTimeout(_)));
}
