//! Route table and the pieces every handler shares.
//!
//! Handlers return [`AppResult`]; any `Err` is rendered by
//! [`AppError`]'s `ResponseError` impl, which is the single place failures
//! become pages. Extractor failures are routed there too.
use actix_files::Files;
use actix_web::{
    dev::{fn_service, ServiceRequest, ServiceResponse},
    http::header::{self, ContentType},
    web, HttpResponse, ResponseError,
};

use crate::error::{AppError, AppResult};

pub mod listings;
pub mod reviews;

pub const LIVENESS_TEXT: &str = "Server is working properly";

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Registers every route. Pair with `default_service(web::to(not_found))`
/// on the `App` so unmatched requests get the 404 page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .route("/", web::get().to(index))
    .route("/listings", web::get().to(listings::index))
    .route("/listings", web::post().to(listings::create))
    .route("/listings/new", web::get().to(listings::new_form))
    .route("/listings/edit/{id}", web::get().to(listings::edit_form))
    .route("/listings/{id}", web::get().to(listings::show))
    .route("/listings/{id}", web::put().to(listings::update))
    .route("/listings/{id}", web::delete().to(listings::delete))
    .route("/listings/{id}", web::post().to(listings::override_post))
    .route("/listings/{id}/reviews", web::post().to(reviews::create))
    .route(
        "/listings/{id}/reviews/{review_id}",
        web::delete().to(reviews::delete),
    )
    .route(
        "/listings/{id}/reviews/{review_id}",
        web::post().to(reviews::override_post),
    );
}

/// Serves `dir` under `/public`. A missing file gets the same 404 page as an unknown route.
pub fn static_files(dir: &str) -> Files {
    Files::new("/public", dir).default_handler(fn_service(|req: ServiceRequest| async move {
        let (req, _) = req.into_parts();
        let resp = AppError::page_not_found().error_response();
        Ok(ServiceResponse::new(req, resp))
    }))
}

// Liveness check
async fn index() -> HttpResponse {
    HttpResponse::Ok().body(LIVENESS_TEXT)
}

pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::page_not_found())
}
