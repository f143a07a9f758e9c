// ABOUTME: Core data models for the Nourish nutrition platform
// ABOUTME: Re-exports nutrition logging and progress tracking types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! # Data Models
//!
//! Immutable value records exchanged between the external stores (meal log,
//! goals, progress calculator) and the analysis engine. The engine consumes
//! them read-only and owns no persistent state.
//!
//! ## Design Principles
//!
//! - **Caller-owned**: every record is produced by an external collaborator
//!   and handed to the engine by reference
//! - **Serializable**: all models support JSON serialization for the chat UI
//! - **Type safe**: typed dates and tagged enums instead of loosely-shaped
//!   objects; shape is validated at the engine boundary

/// Meal logging models (`MealType`, `LoggedMeal`, `NutritionGoals`)
pub mod nutrition;

/// Progress tracking models (`DailyProgress`, `WeeklyTrend`)
pub mod progress;

pub use nutrition::{LoggedMeal, MealType, NutritionGoals};
pub use progress::{
    CalorieProgress, DailyProgress, GoalStatus, MacroBreakdown, MacroProgress, WeeklyTrend,
};
