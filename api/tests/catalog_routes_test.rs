//! HTTP tests for catalog browsing, specs and password strength

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use hw_api::create_app;

use common::{component_id, test_config, test_state};

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["catalog"], "healthy");
}

#[actix_web::test]
async fn test_list_components_paginates() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/components?page=2&per_page=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 15);
    assert_eq!(body["data"]["total_pages"], 2);
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["has_prev"], true);
}

#[actix_web::test]
async fn test_list_components_by_category() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/components?category=power-supply")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|c| c["category"] == "power_supply"));
    // sorted by name
    assert_eq!(items[0]["name"], "Corsair RM650e");
    assert_eq!(items[1]["normalized_specifications"]["wattage"], "850 W");
}

#[actix_web::test]
async fn test_unknown_category_is_rejected() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/components?category=toaster")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["field"], "category");
}

#[actix_web::test]
async fn test_component_detail() {
    let state = test_state();
    let id = component_id(&state, "Corsair Vengeance LPX 16GB DDR4-3200").await;
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/components/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["in_stock"], false);
    assert_eq!(body["data"]["low_stock"], false);
    assert_eq!(body["data"]["normalized_specifications"]["memory_type"], "DDR4");
}

#[actix_web::test]
async fn test_component_detail_errors() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/components/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "COMPONENT_NOT_FOUND");

    let req = test::TestRequest::get()
        .uri("/api/v1/components/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_normalize_spec_key() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/specs/normalize?key=Processor%20Model")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["key"], "Processor Model");
    assert_eq!(body["data"]["canonical"], "model");

    let req = test::TestRequest::get()
        .uri("/api/v1/specs/normalize?key=%20Warranty%20")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["canonical"], "warranty");
}

#[actix_web::test]
async fn test_canonical_keys() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get().uri("/api/v1/specs/keys").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let keys = body["data"].as_array().unwrap();
    assert!(keys.contains(&json!("memory_type")));
    assert!(keys.contains(&json!("tdp")));
}

#[actix_web::test]
async fn test_password_strength() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-strength")
        .set_json(json!({ "password": "Passw0rd!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["score"], 5);
    assert_eq!(body["data"]["label"], "strong");
    assert_eq!(body["data"]["is_valid"], true);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-strength")
        .set_json(json!({ "password": "abc" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["score"], 1);
    assert_eq!(body["data"]["is_valid"], false);
    assert_eq!(body["data"]["requirements"]["lowercase"], true);
}

#[actix_web::test]
async fn test_empty_password_is_valid() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/password-strength")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["score"], 0);
    assert_eq!(body["data"]["is_valid"], true);
}
