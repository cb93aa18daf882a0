mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use oa_api::create_app;
use oa_core::repositories::UserRepository;
use serde_json::Value;

use common::{context, PHONE};

#[actix_web::test]
async fn test_get_user_by_id() {
    let ctx = context();
    ctx.users.register(PHONE).await.unwrap();
    let user = ctx.users.find_by_phone(PHONE).await.unwrap().unwrap();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], user.id);
    assert_eq!(body["data"]["phone_number"], PHONE);
}

#[actix_web::test]
async fn test_get_user_errors() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/users/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/v1/users/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid user ID");
}

#[actix_web::test]
async fn test_list_users_paginates() {
    let ctx = context();
    for phone in ["09000000001", "09000000002", "09000000003"] {
        ctx.users.register(phone).await.unwrap();
    }
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users?page=1&page_size=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let page = &body["data"];
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
    assert_eq!(page["pagination"]["total"], 3);
    assert_eq!(page["pagination"]["total_pages"], 2);
    assert_eq!(page["pagination"]["has_next"], true);
    assert_eq!(page["pagination"]["has_prev"], false);

    let next = page["pagination"]["next_page"].as_str().unwrap();
    assert!(next.starts_with("http://"));
    assert!(next.ends_with("/api/v1/users?page=2&page_size=2"));
    assert!(page["pagination"].get("prev_page").is_none());
}

#[actix_web::test]
async fn test_list_users_falls_back_on_bad_paging() {
    let ctx = context();
    ctx.users.register(PHONE).await.unwrap();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users?page=zero&page_size=500")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["pagination"]["page"], 1);
    assert_eq!(body["data"]["pagination"]["page_size"], 10);
}

#[actix_web::test]
async fn test_list_users_filters_by_phone() {
    let ctx = context();
    ctx.users.register(PHONE).await.unwrap();
    ctx.users.register("09987654321").await.unwrap();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users?phone_number={}", PHONE))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let users = body["data"]["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["phone_number"], PHONE);
    assert_eq!(body["data"]["pagination"]["total"], 1);
}

#[actix_web::test]
async fn test_health_reports_user_store() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["services"]["user_store"]["status"], "up");
    assert_eq!(body["services"]["user_store"]["message"], "memory");
}
