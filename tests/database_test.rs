// ABOUTME: Integration tests for the SQLite persistence layer
// ABOUTME: Covers per-entity CRUD, ordering, day filtering, seeding, and on-disk persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Days, SecondsFormat, Utc};
use common::{create_test_database, create_test_user, new_user_request, oats};
use fittrack_server::database::Database;
use fittrack_server::errors::ErrorCode;
use fittrack_server::models::{
    BodyMeasurements, ExerciseCategory, MealType, NewAchievement, NewBodyMetric, NewPrediction,
    NewWorkout, Nutrients, PredictionKind, UserUpdate, WorkoutExerciseEntry, WorkoutUpdate,
};
use serde_json::json;

fn workout(user_id: &str, name: &str) -> NewWorkout {
    NewWorkout {
        user_id: user_id.to_owned(),
        name: name.to_owned(),
        workout_type: Some("strength".to_owned()),
        duration_minutes: Some(45),
        calories_burned: Some(320),
        exercises: vec![WorkoutExerciseEntry {
            exercise_id: "ex_1".to_owned(),
            sets: 4,
            reps: 8,
            weight: Some(60.0),
            duration: None,
        }],
        notes: None,
        completed: false,
    }
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_user() {
    let db = create_test_database().await.unwrap();
    let user = create_test_user(&db).await.unwrap();

    let by_id = db.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, user.username);
    assert_eq!(by_id.weight_kg, Some(80.0));
    assert_eq!(by_id.streak_days, 0);
    assert!(!by_id.onboarding_complete);

    let by_name = db.get_user_by_username(&user.username).await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);
    assert_eq!(by_name.password_hash, "not-a-real-hash");

    assert!(db.get_user_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let db = create_test_database().await.unwrap();
    let user = create_test_user(&db).await.unwrap();

    let mut duplicate = new_user_request();
    duplicate.username = user.username.clone();
    let err = db.create_user(&duplicate, "hash").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_partial_user_update_keeps_other_fields() {
    let db = create_test_database().await.unwrap();
    let user = create_test_user(&db).await.unwrap();

    let update = UserUpdate {
        weight_kg: Some(78.5),
        onboarding_complete: Some(true),
        ..UserUpdate::default()
    };
    let updated = db.update_user(&user.id, &update).await.unwrap().unwrap();

    assert_eq!(updated.weight_kg, Some(78.5));
    assert!(updated.onboarding_complete);
    assert_eq!(updated.full_name, user.full_name);
    assert_eq!(updated.height_cm, user.height_cm);

    assert!(db
        .update_user("missing", &update)
        .await
        .unwrap()
        .is_none());
}

// ============================================================================
// Workouts
// ============================================================================

#[tokio::test]
async fn test_workouts_newest_first_and_scoped_to_user() {
    let db = create_test_database().await.unwrap();
    db.create_workout(&workout("u1", "first")).await.unwrap();
    db.create_workout(&workout("u1", "second")).await.unwrap();
    db.create_workout(&workout("u2", "other")).await.unwrap();

    let names: Vec<String> = db
        .list_workouts("u1")
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(names, vec!["second", "first"]);
}

#[tokio::test]
async fn test_workout_update_and_delete() {
    let db = create_test_database().await.unwrap();
    let created = db.create_workout(&workout("u1", "Leg day")).await.unwrap();
    assert_eq!(created.exercises.len(), 1);

    let update = WorkoutUpdate {
        completed: Some(true),
        notes: Some("felt strong".to_owned()),
        ..WorkoutUpdate::default()
    };
    let updated = db.update_workout(&created.id, &update).await.unwrap().unwrap();
    assert!(updated.completed);
    assert_eq!(updated.notes.as_deref(), Some("felt strong"));
    assert_eq!(updated.name, "Leg day");

    assert!(db.delete_workout(&created.id).await.unwrap());
    assert!(!db.delete_workout(&created.id).await.unwrap());
    assert!(db.get_workout(&created.id).await.unwrap().is_none());
}

// ============================================================================
// Foods and Nutrition
// ============================================================================

#[tokio::test]
async fn test_food_lookup_by_barcode_and_name() {
    let db = create_test_database().await.unwrap();
    let food = db.create_food(&oats()).await.unwrap();

    let by_barcode = db.get_food_by_barcode("0123456789012").await.unwrap().unwrap();
    assert_eq!(by_barcode.id, food.id);
    assert_eq!(by_barcode.serving_sizes.len(), 1);

    assert_eq!(db.search_foods("oat").await.unwrap().len(), 1);
    assert!(db.search_foods("quinoa").await.unwrap().is_empty());
    assert_eq!(db.list_foods().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_food_update_and_delete() {
    let db = create_test_database().await.unwrap();
    let food = db.create_food(&oats()).await.unwrap();

    let mut replacement = oats();
    replacement.barcode = None;
    replacement.serving_sizes.clear();
    let updated = db.update_food(&food.id, &replacement).await.unwrap().unwrap();
    assert_eq!(updated.id, food.id);
    assert!(updated.barcode.is_none());
    assert!(updated.serving_sizes.is_empty());
    assert!(db.get_food_by_barcode("0123456789012").await.unwrap().is_none());

    assert!(db.update_food("missing", &oats()).await.unwrap().is_none());

    assert!(db.delete_food(&food.id).await.unwrap());
    assert!(!db.delete_food(&food.id).await.unwrap());
    assert!(db.list_foods().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_nutrition_logs_filter_by_day() {
    let db = create_test_database().await.unwrap();
    let nutrients = Nutrients {
        calories: 304.0,
        protein: 10.4,
        carbs: 54.4,
        fat: 5.6,
    };
    let today_log = db
        .create_nutrition_log("u1", "f1", MealType::Breakfast, 80.0, nutrients)
        .await
        .unwrap();

    let yesterday = Utc::now().checked_sub_days(Days::new(1)).unwrap();
    sqlx::query(
        r"
        INSERT INTO nutrition_logs (
            id, user_id, food_id, meal_type, quantity, calories, protein, carbs, fat, logged_at
        )
        VALUES ('old', 'u1', 'f1', 'dinner', 100, 500, 20, 60, 15, $1)
        ",
    )
    .bind(yesterday.to_rfc3339_opts(SecondsFormat::Micros, true))
    .execute(db.pool())
    .await
    .unwrap();

    let today = db
        .list_nutrition_logs("u1", Some(today_log.logged_at.date_naive()))
        .await
        .unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, today_log.id);

    let previous = db
        .list_nutrition_logs("u1", Some(yesterday.date_naive()))
        .await
        .unwrap();
    assert_eq!(previous.len(), 1);
    assert_eq!(previous[0].meal_type, MealType::Dinner);

    assert_eq!(db.list_nutrition_logs("u1", None).await.unwrap().len(), 2);

    assert!(db.delete_nutrition_log("old").await.unwrap());
    assert!(!db.delete_nutrition_log("old").await.unwrap());
}

// ============================================================================
// Body Metrics, Achievements, Predictions
// ============================================================================

#[tokio::test]
async fn test_latest_body_metric() {
    let db = create_test_database().await.unwrap();
    assert!(db.latest_body_metric("u1").await.unwrap().is_none());

    for weight in [82.0, 81.2] {
        db.create_body_metric(&NewBodyMetric {
            user_id: "u1".to_owned(),
            weight: Some(weight),
            body_fat: Some(18.0),
            muscle_mass: None,
            measurements: Some(BodyMeasurements {
                waist: Some(84.0),
                ..BodyMeasurements::default()
            }),
            photo_urls: None,
        })
        .await
        .unwrap();
    }

    let latest = db.latest_body_metric("u1").await.unwrap().unwrap();
    assert_eq!(latest.weight, Some(81.2));
    assert_eq!(latest.measurements.unwrap().waist, Some(84.0));
    assert!(latest.photo_urls.is_none());
    assert_eq!(db.list_body_metrics("u1").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_achievements_round_trip() {
    let db = create_test_database().await.unwrap();
    let created = db
        .create_achievement(&NewAchievement {
            user_id: "u1".to_owned(),
            achievement_type: "streak".to_owned(),
            title: "7 Day Streak".to_owned(),
            description: "Worked out seven days in a row".to_owned(),
            icon_name: "flame".to_owned(),
        })
        .await
        .unwrap();

    let listed = db.list_achievements("u1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert!(db.list_achievements("u2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_predictions_carry_fixed_confidence() {
    let db = create_test_database().await.unwrap();
    let burn = db
        .create_prediction(NewPrediction {
            user_id: "u1".to_owned(),
            kind: PredictionKind::CalorieBurn,
            input_data: json!({ "exerciseType": "running", "duration": 30 }),
            prediction: 402.0,
        })
        .await
        .unwrap();
    assert!((burn.confidence - 0.85).abs() < f64::EPSILON);

    let loss = db
        .create_prediction(NewPrediction {
            user_id: "u1".to_owned(),
            kind: PredictionKind::WeightLoss,
            input_data: json!({ "currentWeight": 80, "targetWeight": 75 }),
            prediction: 6.0,
        })
        .await
        .unwrap();
    assert!((loss.confidence - 0.75).abs() < f64::EPSILON);

    let all = db.list_predictions("u1", None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, loss.id);

    let only_burn = db
        .list_predictions("u1", Some(PredictionKind::CalorieBurn))
        .await
        .unwrap();
    assert_eq!(only_burn.len(), 1);
    assert_eq!(only_burn[0].input_data["exerciseType"], "running");
}

// ============================================================================
// Seeding and Persistence
// ============================================================================

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = create_test_database().await.unwrap();

    assert!(db.seed_reference_data().await.unwrap());
    assert!(!db.seed_reference_data().await.unwrap());

    assert_eq!(db.count_exercises().await.unwrap(), 4);
    let strength = db
        .list_exercises(Some(ExerciseCategory::Strength))
        .await
        .unwrap();
    assert_eq!(strength.len(), 3);

    let templates = db.list_public_templates(None).await.unwrap();
    assert_eq!(templates.len(), 2);
    let push_day = templates
        .iter()
        .find(|t| t.name == "Push Day - Upper Body")
        .unwrap();
    let bench = db
        .get_exercise(&push_day.exercises[0].exercise_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bench.name, "Bench Press");
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("fittrack.db").display());

    let user_id = {
        let db = Database::new(&url).await.unwrap();
        create_test_user(&db).await.unwrap().id
    };

    let reopened = Database::new(&url).await.unwrap();
    assert!(reopened.get_user(&user_id).await.unwrap().is_some());
}
