use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use leptos::logging::error;
use thiserror::Error;

use crate::app::render_error_page;

pub const LISTING_NOT_FOUND: &str = "Listing Not Found";
pub const PAGE_NOT_FOUND: &str = "Page Not Found!";
pub const DEFAULT_MESSAGE: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum AppError {
    /// Payload failed the shape checks; carries every violation joined by `,`.
    #[error("{0}")]
    Validation(String),

    /// Body or path could not be decoded at all.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl AppError {
    pub fn listing_not_found() -> Self {
        AppError::NotFound(LISTING_NOT_FOUND.to_string())
    }

    pub fn page_not_found() -> Self {
        AppError::NotFound(PAGE_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The text shown to the user. Internal failures never leak their cause.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::Database(_) => DEFAULT_MESSAGE.to_string(),
        }
    }
}

// The one place every failure ends up: log it and render the error view.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            error!("[API] {} - {}", status.as_u16(), self);
        }

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(render_error_page(status.as_u16(), &self.message()))
    }
}

pub type AppResult<T> = Result<T, AppError>;
