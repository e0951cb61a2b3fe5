use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use trivia_backend::state::app_state::AppState;

use crate::support::create_test_app;

#[actix_web::test]
async fn success_and_error_responses_carry_trace_id() {
    let app = create_test_app(AppState::without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let ok_trace = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id on success");
    assert!(!ok_trace.is_empty());

    let req = test::TestRequest::get()
        .uri("/api/clues/not-an-id")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem =
        assert_problem_details_from_service_response(resp, "INVALID_ID", StatusCode::BAD_REQUEST, None)
            .await;
    assert_ne!(problem.trace_id, ok_trace, "each request gets its own id");
}
