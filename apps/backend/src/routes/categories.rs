//! Category HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{PageQuery, RecordId, ValidatedJson};
use crate::services::CategoryService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct TitleBody {
    pub title: String,
}

/// GET /api/categories?page=N
async fn list_categories(
    http_req: HttpRequest,
    page: PageQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = page.0;

    let listing = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(CategoryService::new().list(txn, page).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(listing))
}

/// GET /api/categories/{id}
async fn get_category(
    http_req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    let category = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(CategoryService::new().get(txn, &id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(category))
}

/// POST /api/categories
async fn create_category(
    http_req: HttpRequest,
    body: ValidatedJson<TitleBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let title = body.into_inner().title;

    let category = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(CategoryService::new().create(txn, &title).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(category))
}

/// PUT /api/categories/{id}
async fn rename_category(
    http_req: HttpRequest,
    id: RecordId,
    body: ValidatedJson<TitleBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let title = body.into_inner().title;

    let category = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(CategoryService::new().rename(txn, &id, &title).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /api/categories/{id}
///
/// Refused with 409 while any clue still belongs to the category.
async fn delete_category(
    http_req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    let removed = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(CategoryService::new().delete(txn, &id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(removed))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_categories))
        .route("", web::post().to(create_category))
        .route("/{id}", web::get().to(get_category))
        .route("/{id}", web::put().to(rename_category))
        .route("/{id}", web::delete().to(delete_category));
}
