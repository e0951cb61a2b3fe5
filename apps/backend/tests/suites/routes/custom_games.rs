use std::collections::HashSet;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use sea_orm::EntityTrait;
use serde_json::Value;
use trivia_backend::db::require_db;
use trivia_backend::entities::Clues;
use trivia_backend::state::app_state::AppState;
use trivia_backend::AppError;

use crate::support::factory::{
    disable_foreign_keys, seed_category, seed_committed_game, seed_eligible_clues,
    seed_ineligible_clues,
};
use crate::support::{build_test_state, create_test_app, shared_txn};

#[actix_web::test]
async fn post_then_get_returns_the_same_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = shared_txn::open(require_db(&state)?).await;
    let category = seed_category(shared.transaction(), "Rivers").await;
    seed_eligible_clues(shared.transaction(), &category.id, 35).await;
    seed_ineligible_clues(shared.transaction(), &category.id).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .with_shared_txn(shared.clone())
        .build()
        .await;

    let req = test::TestRequest::post().uri("/api/custom-games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    let clues = created["clues"].as_array().expect("clues array");
    assert_eq!(clues.len(), 30);
    let ids: HashSet<&str> = clues.iter().filter_map(|c| c["id"].as_str()).collect();
    assert_eq!(ids.len(), 30);

    let first = &clues[0];
    for key in ["id", "answer", "question", "value", "invalid_count", "canon", "category"] {
        assert!(first.get(key).is_some(), "clue is missing '{key}'");
    }
    assert_eq!(first["category"]["id"], category.id.as_str());
    assert_eq!(first["category"]["title"], category.title.as_str());
    assert!(first["category"].get("canon").is_none());

    let id = created["id"].as_str().expect("id");
    let req = test::TestRequest::get()
        .uri(&format!("/api/custom-games/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;

    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["clues"], created["clues"]);
    assert!(fetched["created_on"].as_str().is_some_and(|s| s.ends_with('Z')));
    Ok(())
}

#[actix_web::test]
async fn lowercase_id_is_accepted() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = shared_txn::open(require_db(&state)?).await;
    let app = create_test_app(state)
        .with_prod_routes()
        .with_shared_txn(shared.clone())
        .build()
        .await;

    let req = test::TestRequest::post().uri("/api/custom-games").to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_str().expect("id").to_ascii_lowercase();

    let req = test::TestRequest::get()
        .uri(&format!("/api/custom-games/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["clues"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[actix_web::test]
async fn unknown_id_is_404_problem() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/custom-games/01ARZ3NDEKTSV4RRFFQ69G5FAV")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "CUSTOM_GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("01ARZ3NDEKTSV4RRFFQ69G5FAV"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn malformed_id_is_400_problem() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for bad in ["42", "nonexistent-id", "01ARZ3NDEKTSV4RRFFQ69G5FA"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/custom-games/{bad}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            "INVALID_ID",
            StatusCode::BAD_REQUEST,
            None,
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn create_without_store_is_503_with_retry_after() {
    let app = create_test_app(AppState::without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post().uri("/api/custom-games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok()),
        Some("1")
    );
    assert_problem_details_from_service_response(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
        None,
    )
    .await;
}

#[actix_web::test]
async fn dangling_clue_link_is_500_problem() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?.clone();
    let game = seed_committed_game(&db, 2).await;
    disable_foreign_keys(&db).await;
    Clues::delete_by_id(game.clues[0].id.clone()).exec(&db).await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::get()
        .uri(&format!("/api/custom-games/{}", game.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "DATA_INTEGRITY",
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )
    .await;
    Ok(())
}
