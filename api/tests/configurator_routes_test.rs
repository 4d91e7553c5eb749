//! HTTP tests for quotes, PSU sizing, shipping and statistics

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use hw_api::create_app;

use common::{am5_build, component_id, test_config, test_state};

#[actix_web::test]
async fn test_quote_compatible_build() {
    let state = test_state();
    let items = am5_build(&state).await;
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/configurator/quote")
        .set_json(json!({ "items": items }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let quote = &body["data"];
    assert_eq!(quote["lines"].as_array().unwrap().len(), 5);
    assert_eq!(quote["total_price"], "1242.30");
    assert_eq!(quote["estimated_wattage"], 285);
    assert_eq!(quote["recommended_psu"], "450W");
    assert_eq!(quote["all_in_stock"], true);
    assert!(quote["compatibility"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_quote_reports_mismatches() {
    let state = test_state();
    let cpu = component_id(&state, "Intel Core i5-14600K").await;
    let board = component_id(&state, "MSI MAG B650 Tomahawk").await;
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/configurator/quote")
        .set_json(json!({
            "items": [
                { "component_id": cpu },
                { "component_id": board }
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let codes: Vec<&str> = body["data"]["compatibility"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["socket_mismatch", "missing_power_supply"]);
    assert_eq!(body["data"]["compatibility"][0]["severity"], "error");
    assert_eq!(body["data"]["compatibility"][1]["severity"], "warning");
}

#[actix_web::test]
async fn test_quote_validation() {
    let state = test_state();
    let cpu = component_id(&state, "AMD Ryzen 5 7600").await;
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/configurator/quote")
        .set_json(json!({ "items": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"].get("items").is_some());

    let req = test::TestRequest::post()
        .uri("/api/v1/configurator/quote")
        .set_json(json!({ "items": [{ "component_id": cpu, "quantity": 0 }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/configurator/quote")
        .set_json(json!({ "items": [{ "component_id": Uuid::new_v4() }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/v1/configurator/quote")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_psu_recommendation() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let cases = vec![
        ("300", "450W", Some(450)),
        ("300.5", "550W", Some(550)),
        ("801", "1000W+", Some(1000)),
        ("0", "N/A", None),
        ("-20", "N/A", None),
    ];
    for (watts, expected, rated) in cases {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/configurator/psu?watts={}", watts))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["recommended"], expected, "watts={}", watts);
        assert_eq!(body["data"]["rated_watts"], json!(rated));
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/configurator/psu?watts=lots")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_shipping_rates() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/shipping/rates")
        .set_json(json!({
            "city": "Rīga",
            "street": "Brīvības iela 1",
            "postal_code": "LV-1010",
            "country": "Latvia"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rates = body["data"].as_array().unwrap();
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0]["method"], "courier");
    assert_eq!(rates[0]["estimated_days"]["max_days"], 1);
    assert_eq!(rates[1]["method"], "postal");

    let req = test::TestRequest::post()
        .uri("/api/v1/shipping/rates")
        .set_json(json!({ "city": "Berlin", "country": "Germany" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rates = body["data"].as_array().unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0]["method"], "postal");
    assert_eq!(rates[0]["estimated_days"]["min_days"], 5);
}

#[actix_web::test]
async fn test_stats() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get().uri("/api/v1/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let stats = &body["data"];
    assert_eq!(stats["component_count"], 15);
    assert_eq!(stats["out_of_stock_count"], 1);
    assert_eq!(stats["low_stock_count"], 4);
    assert_eq!(stats["category_counts"]["cpu"], 3);
    assert_eq!(stats["public_configuration_count"], 0);
}
