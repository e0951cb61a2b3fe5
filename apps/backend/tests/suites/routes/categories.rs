use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::{json, Value};
use trivia_backend::adapters::clues_sea::ClueCreate;
use trivia_backend::db::require_db;
use trivia_backend::AppError;

use crate::support::factory::{seed_category, seed_clue};
use crate::support::{build_test_state, create_test_app, shared_txn};

#[actix_web::test]
async fn create_read_rename_delete() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = shared_txn::open(require_db(&state)?).await;
    let app = create_test_app(state)
        .with_prod_routes()
        .with_shared_txn(shared.clone())
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "title": "  Potent Potables " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["title"], "Potent Potables");
    assert_eq!(created["canon"], false);
    let id = created["id"].as_str().expect("id").to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let fetched: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{id}"))
        .set_json(json!({ "title": "Beverages" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let renamed: Value = test::read_body_json(resp).await;
    assert_eq!(renamed["title"], "Beverages");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: Value = test::read_body_json(resp).await;
    assert_eq!(removed["id"], id.as_str());

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "CATEGORY_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn duplicate_title_is_409() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = shared_txn::open(require_db(&state)?).await;
    let existing = seed_category(shared.transaction(), "Opera").await;
    let app = create_test_app(state)
        .with_prod_routes()
        .with_shared_txn(shared.clone())
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "title": existing.title }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "UNIQUE_TITLE",
        StatusCode::CONFLICT,
        Some("already exists"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn bad_bodies_are_400() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "title": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_TITLE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\":")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn delete_with_clues_is_409() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = shared_txn::open(require_db(&state)?).await;
    let category = seed_category(shared.transaction(), "Rivers").await;
    seed_clue(
        shared.transaction(),
        ClueCreate::new(&category.id, "Q", "A", 200),
    )
    .await;
    let app = create_test_app(state)
        .with_prod_routes()
        .with_shared_txn(shared.clone())
        .build()
        .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{}", category.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "FK_VIOLATION",
        StatusCode::CONFLICT,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn listing_pages_and_rejects_bad_page() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = shared_txn::open(require_db(&state)?).await;
    let rivers = seed_category(shared.transaction(), "Rivers").await;
    seed_clue(shared.transaction(), ClueCreate::new(&rivers.id, "Q", "A", 200)).await;
    let app = create_test_app(state)
        .with_prod_routes()
        .with_shared_txn(shared.clone())
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let listing: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listing["page_count"], 0);
    assert_eq!(listing["categories"][0]["id"], rivers.id.as_str());
    assert_eq!(listing["categories"][0]["num_clues"], 1);

    for bad in ["-1", "two", "100000000000000000"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/categories?page={bad}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            "INVALID_PAGE",
            StatusCode::UNPROCESSABLE_ENTITY,
            None,
        )
        .await;
    }
    Ok(())
}
