use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::analysis::current_year;

async fn post_analysis(payload: Value) -> axum::response::Response {
    router()
        .oneshot(
            Request::post("/risk-analysis")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn zero_income_payload_is_ineligible() {
    let response = post_analysis(json!({
        "age": 35,
        "dependents": 2,
        "house": {"ownership_status": "owned"},
        "income": 0,
        "marital_status": "married",
        "risk_questions": [0, 1, 0],
        "vehicle": {"year": 2018}
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "auto": "ineligible",
            "disability": "ineligible",
            "home": "ineligible",
            "life": "ineligible"
        })
    );
}

#[tokio::test]
async fn mid_band_payload_with_mortgage_and_recent_vehicle() {
    let response = post_analysis(json!({
        "age": 35,
        "dependents": 3,
        "house": {"ownership_status": "mortgaged"},
        "income": 100000,
        "marital_status": "single",
        "risk_questions": [1, 1, 1],
        "vehicle": {"year": current_year() - 2}
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "auto": "regular",
            "disability": "regular",
            "home": "responsible",
            "life": "regular"
        })
    );
}

#[tokio::test]
async fn payload_without_assets_is_scored() {
    let response = post_analysis(json!({
        "age": 35,
        "dependents": 0,
        "income": 250000,
        "marital_status": "married",
        "risk_questions": [true, true, false]
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "auto": "regular",
            "disability": "economic",
            "home": "regular",
            "life": "regular"
        })
    );
}

#[tokio::test]
async fn constraint_violations_are_unprocessable() {
    let response = post_analysis(json!({
        "age": -1,
        "dependents": 0,
        "income": 1000,
        "marital_status": "single",
        "risk_questions": [0, 0],
        "vehicle": {"year": current_year()}
    }))
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let fields: Vec<&str> = payload["fields"]
        .as_array()
        .expect("fields listed")
        .iter()
        .filter_map(|entry| entry["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["age", "risk_questions", "vehicle.year"]);
}

#[tokio::test]
async fn empty_body_is_rejected_as_client_error() {
    let response = post_analysis(json!({})).await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn unknown_marital_status_is_rejected() {
    let response = post_analysis(json!({
        "age": 35,
        "dependents": 0,
        "income": 1000,
        "marital_status": "divorced",
        "risk_questions": [0, 0, 0]
    }))
    .await;

    assert!(response.status().is_client_error());
}
