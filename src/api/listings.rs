use actix_web::{web, HttpResponse};
use leptos::logging::log;
use serde_json::Value;

use super::{html, redirect};
use crate::app::{render_edit, render_index, render_new, render_show};
use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::payload;
use crate::validation::validate_listing;

type FormPairs = web::Form<Vec<(String, String)>>;

pub async fn index(db: web::Data<Database>) -> AppResult<HttpResponse> {
    let listings = db.get_listings().await?;
    Ok(html(render_index(listings)))
}

pub async fn new_form() -> HttpResponse {
    html(render_new())
}

pub async fn create(db: web::Data<Database>, form: FormPairs) -> AppResult<HttpResponse> {
    let payload = payload::nest(form.into_inner());
    let input = validate_listing(&payload)?;

    let listing = db.insert_listing(&input).await?;
    log!("[API] Created listing {}", listing.id);
    Ok(redirect("/listings"))
}

pub async fn show(db: web::Data<Database>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match db.get_listing_detail(&id).await? {
        Some(detail) => Ok(html(render_show(detail))),
        None => Err(AppError::listing_not_found()),
    }
}

pub async fn edit_form(db: web::Data<Database>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match db.get_listing(&id).await? {
        Some(listing) => Ok(html(render_edit(listing))),
        None => Err(AppError::listing_not_found()),
    }
}

pub async fn update(
    db: web::Data<Database>,
    path: web::Path<String>,
    form: FormPairs,
) -> AppResult<HttpResponse> {
    let payload = payload::nest(form.into_inner());
    apply_update(&db, &path.into_inner(), &payload).await
}

pub async fn delete(db: web::Data<Database>, path: web::Path<String>) -> AppResult<HttpResponse> {
    apply_delete(&db, &path.into_inner()).await
}

/// POST /listings/{id} with a `_method` form field.
pub async fn override_post(
    db: web::Data<Database>,
    path: web::Path<String>,
    form: FormPairs,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let payload = payload::nest(form.into_inner());

    match payload::method_override(&payload).as_deref() {
        Some("PUT") => apply_update(&db, &id, &payload).await,
        Some("DELETE") => apply_delete(&db, &id).await,
        _ => Err(AppError::page_not_found()),
    }
}

async fn apply_update(db: &Database, id: &str, payload: &Value) -> AppResult<HttpResponse> {
    let input = validate_listing(payload)?;

    if !db.update_listing(id, &input).await? {
        return Err(AppError::listing_not_found());
    }
    log!("[API] Updated listing {}", id);
    Ok(redirect(&format!("/listings/{id}")))
}

// Missing ids are not an error here
async fn apply_delete(db: &Database, id: &str) -> AppResult<HttpResponse> {
    let deleted = db.delete_listing(id).await?;
    log!("[API] Delete listing {}: existed = {}", id, deleted);
    Ok(redirect("/listings"))
}
