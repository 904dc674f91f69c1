// ABOUTME: Integration tests for prediction, recommendation, and achievement routes
// ABOUTME: Persisted estimates with fixed confidence, kind filtering, plans, and badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::create_test_resources;
use fittrack_server::intelligence::FixedJitter;
use fittrack_server::resources::ServerResources;
use fittrack_server::server::build_router;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;

fn calorie_body() -> Value {
    json!({
        "userId": "user-1",
        "exerciseType": "running",
        "duration": 60,
        "weight": 70,
        "age": 25,
        "gender": "female"
    })
}

fn weight_loss_body() -> Value {
    json!({
        "userId": "user-1",
        "currentWeight": 80,
        "targetWeight": 75,
        "weeklyCalorieDeficit": 3500,
        "activityLevel": "lightly_active"
    })
}

// ============================================================================
// Predictions
// ============================================================================

#[tokio::test]
async fn test_calorie_burn_prediction_is_persisted() {
    let resources = create_test_resources().await.unwrap();

    let record: Value = AxumTestRequest::post("/api/predictions/calorie-burn")
        .json(&calorie_body())
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert_eq!(record["predictionType"], "calorie_burn");
    assert_eq!(record["prediction"], 805.0);
    assert_eq!(record["confidence"], 0.85);
    assert_eq!(record["inputData"]["exerciseType"], "running");
    assert_eq!(record["inputData"]["gender"], "female");
    assert!(record["inputData"].get("userId").is_none());

    let stored = resources
        .database
        .list_predictions("user-1", None)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_calorie_burn_applies_injected_jitter() {
    let base = create_test_resources().await.unwrap();
    let resources = Arc::new(
        ServerResources::clone(&base).with_jitter(Arc::new(FixedJitter(1.1))),
    );

    let record: Value = AxumTestRequest::post("/api/predictions/calorie-burn")
        .json(&calorie_body())
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    assert_eq!(record["prediction"], 886.0);
}

#[tokio::test]
async fn test_weight_loss_prediction_is_persisted() {
    let resources = create_test_resources().await.unwrap();

    let record: Value = AxumTestRequest::post("/api/predictions/weight-loss")
        .json(&weight_loss_body())
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert_eq!(record["predictionType"], "weight_loss");
    assert_eq!(record["prediction"], 6.0);
    assert_eq!(record["confidence"], 0.75);
    assert_eq!(record["inputData"]["activityLevel"], "lightly_active");
}

#[tokio::test]
async fn test_invalid_predictions_are_rejected_and_not_stored() {
    let resources = create_test_resources().await.unwrap();

    let mut body = calorie_body();
    body["duration"] = json!(0);
    AxumTestRequest::post("/api/predictions/calorie-burn")
        .json(&body)
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let mut body = calorie_body();
    body["age"] = json!(-4);
    AxumTestRequest::post("/api/predictions/calorie-burn")
        .json(&body)
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let mut body = weight_loss_body();
    body["targetWeight"] = json!(90);
    let error: Value = AxumTestRequest::post("/api/predictions/weight-loss")
        .json(&body)
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error["error"]["code"], "INVALID_INPUT");

    assert!(resources
        .database
        .list_predictions("user-1", None)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_malformed_prediction_bodies_use_error_envelope() {
    let resources = create_test_resources().await.unwrap();

    let mut body = weight_loss_body();
    body.as_object_mut().unwrap().remove("weeklyCalorieDeficit");
    let error: Value = AxumTestRequest::post("/api/predictions/weight-loss")
        .json(&body)
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error["error"]["code"], "INVALID_INPUT");
    assert!(error["error"]["message"]
        .as_str()
        .unwrap()
        .contains("weeklyCalorieDeficit"));

    let mut body = calorie_body();
    body["duration"] = json!("an hour");
    let error: Value = AxumTestRequest::post("/api/predictions/calorie-burn")
        .json(&body)
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error["error"]["code"], "INVALID_INPUT");

    let error: Value = AxumTestRequest::post("/api/predictions/calorie-burn")
        .raw_json("{\"userId\": ")
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(error["error"]["code"], "INVALID_INPUT");

    assert!(resources
        .database
        .list_predictions("user-1", None)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_list_predictions_by_kind() {
    let resources = create_test_resources().await.unwrap();
    AxumTestRequest::post("/api/predictions/calorie-burn")
        .json(&calorie_body())
        .send(build_router(resources.clone()))
        .await;
    AxumTestRequest::post("/api/predictions/weight-loss")
        .json(&weight_loss_body())
        .send(build_router(resources.clone()))
        .await;

    let all: Vec<Value> = AxumTestRequest::get("/api/predictions/user/user-1")
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["predictionType"], "weight_loss");

    let burns: Vec<Value> = AxumTestRequest::get("/api/predictions/user/user-1?type=calorie_burn")
        .send(build_router(resources.clone()))
        .await
        .json();
    assert_eq!(burns.len(), 1);

    let unknown: Vec<Value> = AxumTestRequest::get("/api/predictions/user/user-1?type=sleep")
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(unknown.is_empty());
}

// ============================================================================
// Recommendations
// ============================================================================

#[tokio::test]
async fn test_recommendation_lookup() {
    let resources = create_test_resources().await.unwrap();

    let uri = "/api/recommendations?goal=weight_loss&experience=intermediate";
    let plan: Value = AxumTestRequest::get(uri)
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(plan["duration"], 45);
    assert_eq!(plan["frequency"], 4);
    assert_eq!(plan["exercises"][0], "running");

    let fallback: Value = AxumTestRequest::get("/api/recommendations")
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fallback["exercises"][0], "walking");
    assert_eq!(fallback["frequency"], 3);
}

// ============================================================================
// Achievements
// ============================================================================

#[tokio::test]
async fn test_achievements_create_and_list() {
    let resources = create_test_resources().await.unwrap();

    let created: Value = AxumTestRequest::post("/api/achievements")
        .json(&json!({
            "userId": "user-1",
            "type": "consistency",
            "title": "Ten Workouts",
            "description": "Logged ten workouts",
            "iconName": "trophy"
        }))
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    assert_eq!(created["type"], "consistency");

    let listed: Vec<Value> = AxumTestRequest::get("/api/achievements/user/user-1")
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["iconName"], "trophy");

    AxumTestRequest::post("/api/achievements")
        .json(&json!({
            "userId": "user-1",
            "type": "",
            "title": "Nameless",
            "description": "",
            "iconName": "star"
        }))
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
