// ABOUTME: Criterion benchmarks for the nutrition analysis engine
// ABOUTME: Measures pattern detection and the full comprehensive-analysis pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Criterion benchmarks for the nutrition analysis engine.
//!
//! Measures pattern detection, adherence scoring, and the full pipeline on
//! synthetic multi-week meal histories.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nourish::intelligence::{
    adherence_score, CoachingContext, PatternAnalyzer, ProgressAnalyzer, RemainingTargets,
    TimeOfDay,
};
use nourish::models::{
    CalorieProgress, DailyProgress, GoalStatus, LoggedMeal, MacroBreakdown, MacroProgress,
    MealType, NutritionGoals, WeeklyTrend,
};

fn goals() -> NutritionGoals {
    NutritionGoals {
        daily_calories: 2000.0,
        protein_g: 150.0,
        carbs_g: 200.0,
        fat_g: 67.0,
    }
}

/// Generate `days` days of meals with mild deterministic variation
fn generate_meals(days: usize) -> Vec<LoggedMeal> {
    let base = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    (0..days)
        .flat_map(|index| {
            let date = base + chrono::Days::new(index as u64);
            let jitter = ((index * 37) % 11) as f64 * 20.0;
            vec![
                LoggedMeal {
                    date,
                    meal_type: MealType::Breakfast,
                    calories: 450.0 + jitter,
                    protein_g: 35.0,
                    carbs_g: 50.0,
                    fat_g: 14.0,
                },
                LoggedMeal {
                    date,
                    meal_type: MealType::Lunch,
                    calories: 680.0 + jitter,
                    protein_g: 50.0,
                    carbs_g: 70.0,
                    fat_g: 22.0,
                },
                LoggedMeal {
                    date,
                    meal_type: MealType::Dinner,
                    calories: 820.0 - jitter,
                    protein_g: 60.0,
                    carbs_g: 75.0,
                    fat_g: 28.0,
                },
            ]
        })
        .collect()
}

fn generate_progress(days: usize) -> Vec<DailyProgress> {
    let base = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    (0..days)
        .map(|index| {
            let consumed = 1900.0 + ((index * 53) % 9) as f64 * 25.0;
            DailyProgress {
                date: base + chrono::Days::new(index as u64),
                calories: CalorieProgress::new(consumed, 2000.0),
                macros: MacroBreakdown {
                    protein: MacroProgress::new(140.0, 150.0),
                    carbs: MacroProgress::new(190.0, 200.0),
                    fats: MacroProgress::new(62.0, 67.0),
                },
                status: GoalStatus::Met,
            }
        })
        .collect()
}

fn generate_weekly_trends(weeks: usize) -> Vec<WeeklyTrend> {
    let base = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    (0..weeks)
        .map(|index| WeeklyTrend {
            week_start: base + chrono::Days::new(index as u64 * 7),
            average_calories: 1950.0 + ((index * 29) % 7) as f64 * 30.0,
            goal_adherence: 65.0 + ((index * 13) % 5) as f64 * 5.0,
            total_days: 7,
            days_met_goal: 5,
        })
        .collect()
}

fn bench_pattern_analysis(c: &mut Criterion) {
    let analyzer = PatternAnalyzer::new();
    let goals = goals();

    let mut group = c.benchmark_group("pattern_analysis");
    for days in [7_usize, 28, 90] {
        let meals = generate_meals(days);
        group.throughput(Throughput::Elements(meals.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &meals, |b, meals| {
            b.iter(|| analyzer.analyze(black_box(meals), black_box(&goals)));
        });
    }
    group.finish();
}

fn bench_adherence_scoring(c: &mut Criterion) {
    let progress = generate_progress(90);
    c.bench_function("adherence_score_90_days", |b| {
        b.iter(|| adherence_score(black_box(&progress)));
    });
}

fn bench_comprehensive_analysis(c: &mut Criterion) {
    let analyzer = ProgressAnalyzer::new();
    let goals = goals();
    let meals = generate_meals(28);
    let progress = generate_progress(28);
    let trends = generate_weekly_trends(4);
    let context = CoachingContext {
        today: progress.last().cloned(),
        remaining: RemainingTargets {
            calories: 400.0,
            protein_g: 30.0,
            carbs_g: 40.0,
            fat_g: 12.0,
        },
        time_of_day: TimeOfDay::Evening,
    };

    c.bench_function("comprehensive_analysis_28_days", |b| {
        b.iter(|| {
            analyzer.perform_comprehensive_analysis(
                black_box(&meals),
                black_box(&progress),
                black_box(&trends),
                black_box(&goals),
                black_box(&context),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_pattern_analysis,
    bench_adherence_scoring,
    bench_comprehensive_analysis
);
criterion_main!(benches);
