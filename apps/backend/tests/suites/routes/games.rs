use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::{json, Value};
use trivia_backend::adapters::clues_sea::ClueCreate;
use trivia_backend::db::require_db;
use trivia_backend::AppError;

use crate::support::factory::{seed_category, seed_clue, seed_game};
use crate::support::{build_test_state, create_test_app, shared_txn};

#[actix_web::test]
async fn game_view_carries_aired_clue_total() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = shared_txn::open(require_db(&state)?).await;
    let game = seed_game(shared.transaction(), 6012).await;
    let category = seed_category(shared.transaction(), "Rivers").await;
    for n in 0..2 {
        seed_clue(
            shared.transaction(),
            ClueCreate::new(&category.id, format!("Q{n}"), format!("A{n}"), 400).aired_in(&game.id),
        )
        .await;
    }
    let app = create_test_app(state)
        .with_prod_routes()
        .with_shared_txn(shared.clone())
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}", game.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "id": game.id,
            "episode_id": 6012,
            "aired": "2004-06-02",
            "canon": true,
            "total_amount_won": 2,
        })
    );

    let req = test::TestRequest::get()
        .uri("/api/games/01ARZ3NDEKTSV4RRFFQ69G5FAV")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    Ok(())
}
