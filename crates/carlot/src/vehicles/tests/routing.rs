use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::{
    build_service, camry, enriched_service, impala, read_json_body, vehicle_router_with_service,
    StubMapsGateway, StubPriceGateway,
};

fn draft_payload(vehicle: crate::vehicles::domain::Vehicle) -> Value {
    json!({
        "condition": "USED",
        "details": vehicle.details,
        "location": { "lat": vehicle.location.lat, "lon": vehicle.location.lon },
    })
}

fn post_vehicle(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/vehicles")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn put_vehicle(id: u64, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(format!("/api/v1/vehicles/{id}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get_vehicle(id: u64) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/v1/vehicles/{id}"))
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn create_returns_created_with_enriched_record() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let response = router
        .oneshot(post_vehicle(&draft_payload(camry())))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["price"], json!("USD 20000.00"));
    assert_eq!(body["location"]["city"], json!("Colorado Springs"));
    assert_eq!(body["location"]["lat"], json!(38.0));
}

#[tokio::test]
async fn create_ignores_caller_supplied_identifier_and_price() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let mut payload = draft_payload(camry());
    payload["id"] = json!(77);
    payload["price"] = json!("USD 1.00");

    let response = router
        .oneshot(post_vehicle(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["price"], json!("USD 20000.00"));
}

#[tokio::test]
async fn fetch_returns_enriched_record() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let created = router
        .clone()
        .oneshot(post_vehicle(&draft_payload(camry())))
        .await
        .expect("router responds");
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = router
        .oneshot(get_vehicle(1))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["price"], json!("USD 20000.00"));
    assert_eq!(body["details"]["model"], json!("Camry"));
}

#[tokio::test]
async fn fetch_of_missing_vehicle_returns_not_found() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let response = router
        .oneshot(get_vehicle(42))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], json!("vehicle not found"));
}

#[tokio::test]
async fn non_numeric_identifier_is_rejected() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/vehicles/not-a-number")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_stored_records_without_enrichment() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let created = router
        .clone()
        .oneshot(post_vehicle(&draft_payload(camry())))
        .await
        .expect("router responds");
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/vehicles")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let vehicles = body.as_array().expect("array payload");
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["price"], Value::Null);
    assert_eq!(vehicles[0]["location"]["city"], Value::Null);
}

#[tokio::test]
async fn update_keeps_identifier_and_condition() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let created = router
        .clone()
        .oneshot(post_vehicle(&draft_payload(camry())))
        .await
        .expect("router responds");
    assert_eq!(created.status(), StatusCode::CREATED);

    let mut payload = draft_payload(impala());
    payload["condition"] = json!("NEW");

    let response = router
        .oneshot(put_vehicle(1, &payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["condition"], json!("USED"));
    assert_eq!(body["details"]["model"], json!("Impala"));
}

#[tokio::test]
async fn update_of_missing_vehicle_returns_not_found() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let response = router
        .oneshot(put_vehicle(42, &draft_payload(impala())))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_no_content_then_fetch_reports_not_found() {
    let (service, _) = enriched_service();
    let router = vehicle_router_with_service(service);

    let created = router
        .clone()
        .oneshot(post_vehicle(&draft_payload(camry())))
        .await
        .expect("router responds");
    assert_eq!(created.status(), StatusCode::CREATED);

    let deleted = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/vehicles/1")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let fetched = router
        .oneshot(get_vehicle(1))
        .await
        .expect("router responds");
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lookup_failure_surfaces_as_bad_gateway() {
    let (service, _) = build_service(
        StubPriceGateway::failing(),
        StubMapsGateway::resolving("Colorado Springs", "CO"),
    );
    let router = vehicle_router_with_service(service);

    let response = router
        .oneshot(post_vehicle(&draft_payload(camry())))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("price lookup"));
}
