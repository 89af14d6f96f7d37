use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use super::models::{QuoteRequest, Submission};
use super::SubmissionError;
use crate::state::AppState;

/// POST /pricing: sanitize the form, run the generator, redirect to the PDF.
pub async fn submit_quote(
    req: HttpRequest,
    form: web::Form<QuoteRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    let submission = match Submission::parse(form.into_inner()) {
        Ok(submission) => submission,
        Err(err) => {
            log::warn!("Pricing request REJECTED from {client_ip}: {err}");
            return error_response(&err);
        }
    };

    log::info!(
        "Pricing request: IP={client_ip}, Name='{}', Email='{}'",
        submission.name(),
        submission.email()
    );

    match state.generator.generate(&submission).await {
        Ok(artifact) => HttpResponse::Found()
            .insert_header((header::LOCATION, artifact.public_path()))
            .finish(),
        Err(err) => {
            log::error!("Pricing generation failed for {client_ip}: {err}");
            error_response(&err)
        }
    }
}

fn error_response(err: &SubmissionError) -> HttpResponse {
    match err {
        SubmissionError::InvalidName => {
            HttpResponse::BadRequest().body("Error: Invalid name provided.")
        }
        SubmissionError::EmptyEmail => {
            HttpResponse::BadRequest().body("Error: Invalid email provided.")
        }
        SubmissionError::InvalidEmail => {
            HttpResponse::BadRequest().body("Error: Email contains invalid characters.")
        }
        SubmissionError::GeneratorTimeout(_) => HttpResponse::GatewayTimeout()
            .body("Error: Pricing PDF generation timed out. Please try again later."),
        SubmissionError::Spawn(_)
        | SubmissionError::GeneratorExit(_)
        | SubmissionError::EmptyArtifact
        | SubmissionError::UnsafeArtifact(_) => HttpResponse::InternalServerError()
            .body("Error: Failed to generate pricing PDF. Please try again later."),
    }
}
