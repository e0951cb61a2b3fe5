//! Custom game HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::RecordId;
use crate::services::CustomGameService;
use crate::state::app_state::AppState;

/// POST /api/custom-games
///
/// Samples a fresh set of clues and persists them as a new custom game.
/// The definition and every clue link are written in one transaction.
async fn create_custom_game(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service: CustomGameService = CustomGameService::default();
            Ok(service.create(txn).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(view))
}

/// GET /api/custom-games/{id}
///
/// A path segment that is not a ULID never reaches the service and answers
/// 400 `INVALID_ID`; a well-formed id with no stored game answers 404
/// `CUSTOM_GAME_NOT_FOUND`.
async fn get_custom_game(
    http_req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    let view = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            let service: CustomGameService = CustomGameService::default();
            Ok(service.get(txn, &id).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_custom_game))
        .route("/{id}", web::get().to(get_custom_game));
}
