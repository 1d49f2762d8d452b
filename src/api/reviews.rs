use actix_web::{web, HttpResponse};
use leptos::logging::log;

use super::redirect;
use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::payload;
use crate::validation::validate_review;

pub async fn create(
    db: web::Data<Database>,
    path: web::Path<String>,
    form: web::Form<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let listing_id = path.into_inner();
    let payload = payload::nest(form.into_inner());
    let input = validate_review(&payload)?;

    match db.insert_review(&listing_id, &input).await? {
        Some(review) => {
            log!("[API] Review {} added to listing {}", review.id, listing_id);
            Ok(redirect(&format!("/listings/{listing_id}")))
        }
        None => Err(AppError::listing_not_found()),
    }
}

pub async fn delete(
    db: web::Data<Database>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (listing_id, review_id) = path.into_inner();
    apply_delete(&db, &listing_id, &review_id).await
}

/// POST /listings/{id}/reviews/{review_id} with `_method=DELETE`.
pub async fn override_post(
    db: web::Data<Database>,
    path: web::Path<(String, String)>,
    form: web::Form<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let (listing_id, review_id) = path.into_inner();
    let payload = payload::nest(form.into_inner());

    match payload::method_override(&payload).as_deref() {
        Some("DELETE") => apply_delete(&db, &listing_id, &review_id).await,
        _ => Err(AppError::page_not_found()),
    }
}

async fn apply_delete(db: &Database, listing_id: &str, review_id: &str) -> AppResult<HttpResponse> {
    let removed = db.delete_review(listing_id, review_id).await?;
    log!("[API] Delete review {} on listing {}: removed = {}", review_id, listing_id, removed);
    Ok(redirect(&format!("/listings/{listing_id}")))
}
