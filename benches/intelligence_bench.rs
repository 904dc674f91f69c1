// ABOUTME: Criterion benchmarks for the heuristic prediction engine
// ABOUTME: Measures calorie-burn, weight-loss, plan lookup, and daily nutrition summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the prediction engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack_server::intelligence::{
    estimate_calorie_burn, estimate_weight_loss, recommend_workout_for, summarize_day,
    CalorieBurnRequest, FixedJitter, Gender, PredictionConfig, SeededJitter, WeightLossRequest,
};
use fittrack_server::models::{ActivityLevel, MealType, NutritionLog};

const MEALS: [MealType; 4] = [
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Dinner,
    MealType::Snack,
];

fn generate_logs(count: usize) -> Vec<NutritionLog> {
    let logged_at = Utc::now();
    (0..count)
        .map(|index| NutritionLog {
            id: format!("log_{index}"),
            user_id: "bench_user".to_owned(),
            food_id: format!("food_{}", index % 7),
            meal_type: MEALS[index % MEALS.len()],
            quantity: 50.0 + (index % 200) as f64,
            calories: 80.0 + (index % 400) as f64,
            protein: (index % 30) as f64,
            carbs: (index % 60) as f64,
            fat: (index % 20) as f64,
            logged_at,
        })
        .collect()
}

fn bench_calorie_burn(c: &mut Criterion) {
    let config = &PredictionConfig::global().calorie_burn;
    let mut group = c.benchmark_group("calorie_burn");

    for activity in ["running", "swimming", "unknown_activity"] {
        let request = CalorieBurnRequest {
            activity: activity.to_owned(),
            duration_minutes: 45.0,
            weight_kg: 72.5,
            age_years: 34,
            gender: Gender::Female,
        };
        group.bench_with_input(
            BenchmarkId::new("fixed_jitter", activity),
            &request,
            |b, request| {
                b.iter(|| estimate_calorie_burn(black_box(request), config, &FixedJitter::NONE));
            },
        );
    }

    let seeded = SeededJitter::new(42);
    let request = CalorieBurnRequest {
        activity: "cycling".to_owned(),
        duration_minutes: 60.0,
        weight_kg: 80.0,
        age_years: 40,
        gender: Gender::Male,
    };
    group.bench_function("seeded_jitter", |b| {
        b.iter(|| estimate_calorie_burn(black_box(&request), config, &seeded));
    });

    group.finish();
}

fn bench_weight_loss(c: &mut Criterion) {
    let config = &PredictionConfig::global().weight_loss;
    let mut group = c.benchmark_group("weight_loss");

    for (label, current, target) in [("small", 70.0, 67.0), ("large", 120.0, 80.0)] {
        let request = WeightLossRequest {
            current_weight_kg: current,
            target_weight_kg: target,
            weekly_calorie_deficit: 3500.0,
            activity_level: Some(ActivityLevel::ModeratelyActive),
        };
        group.bench_with_input(BenchmarkId::new("timeline", label), &request, |b, request| {
            b.iter(|| estimate_weight_loss(black_box(request), config));
        });
    }

    group.finish();
}

fn bench_recommendations(c: &mut Criterion) {
    c.bench_function("recommend_workout_for", |b| {
        b.iter(|| recommend_workout_for(black_box("muscle_gain"), black_box("Advanced")));
    });
}

fn bench_nutrition_summary(c: &mut Criterion) {
    let config = &PredictionConfig::global().nutrition;
    let mut group = c.benchmark_group("nutrition_summary");

    for count in [10_usize, 100, 1000] {
        let logs = generate_logs(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("summarize_day", count), &logs, |b, logs| {
            b.iter(|| summarize_day(black_box(logs), Some(75.0), config));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calorie_burn,
    bench_weight_loss,
    bench_recommendations,
    bench_nutrition_summary
);
criterion_main!(benches);
