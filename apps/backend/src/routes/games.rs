//! Recorded game HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::RecordId;
use crate::services::GameService;
use crate::state::app_state::AppState;

/// GET /api/games/{id}
///
/// Returns the aired game with `total_amount_won` derived from its clues.
async fn get_game(
    http_req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    let game = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move { Ok(GameService::new().get(txn, &id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(game))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{id}", web::get().to(get_game));
}
