// ABOUTME: Data model re-exports from the nourish-core crate
// ABOUTME: Preserves nourish::models import paths for consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! # Data Models
//!
//! Re-exports the foundation crate's models so consumers can import from
//! `nourish::models` without depending on `nourish-core` directly.

pub use nourish_core::models::{
    CalorieProgress, DailyProgress, GoalStatus, LoggedMeal, MacroBreakdown, MacroProgress,
    MealType, NutritionGoals, WeeklyTrend,
};
