use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};

use super::templates;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

pub async fn home() -> impl Responder {
    html(templates::home_page())
}

pub async fn contact() -> impl Responder {
    html(templates::contact_page())
}

pub async fn pricing() -> impl Responder {
    html(templates::pricing_page())
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body("<h1>404 Not Found</h1>")
}
