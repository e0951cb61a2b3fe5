//! Clue HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{PageQuery, RecordId};
use crate::services::ClueService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct RandomClueQuery {
    valid: Option<bool>,
}

/// GET /api/clues?page=N
async fn list_clues(
    http_req: HttpRequest,
    page: PageQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = page.0;

    let listing = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(ClueService::new().list(txn, page).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(listing))
}

/// GET /api/clues/{id}
async fn get_clue(
    http_req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    let clue = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(ClueService::new().get(txn, &id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(clue))
}

/// PUT /api/clues/{id}
///
/// Records one invalidation report against the clue.
async fn invalidate_clue(
    http_req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    let clue = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(ClueService::new().invalidate(txn, &id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(clue))
}

/// GET /api/random-clue?valid=true|false
///
/// `valid` defaults to true; `valid=false` also draws from invalidated clues.
async fn random_clue(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let only_valid = web::Query::<RandomClueQuery>::from_query(http_req.query_string())
        .map_err(|e| {
            AppError::bad_request(
                ErrorCode::BadRequest,
                format!("Query parameter 'valid' must be true or false: {e}"),
            )
        })?
        .valid
        .unwrap_or(true);

    let clue = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(ClueService::new().random(txn, only_valid).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(clue))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/clues", web::get().to(list_clues))
        .route("/api/clues/{id}", web::get().to(get_clue))
        .route("/api/clues/{id}", web::put().to(invalidate_clue))
        .route("/api/random-clue", web::get().to(random_clue));
}
