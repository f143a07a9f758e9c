// ABOUTME: Core types for the Nourish nutrition intelligence platform
// ABOUTME: Foundation crate with data models and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

#![deny(unsafe_code)]

//! # Nourish Core
//!
//! Foundation crate providing the shared data models and error types for the
//! Nourish nutrition intelligence engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AnalysisError` and the `AnalysisResult` alias
//! - **models**: Logged meals, nutrition goals, daily progress, weekly trends

/// Error types for the analysis engine
pub mod errors;

/// Core data models (`LoggedMeal`, `NutritionGoals`, `DailyProgress`, `WeeklyTrend`)
pub mod models;

pub use errors::{AnalysisError, AnalysisResult};
pub use models::{
    CalorieProgress, DailyProgress, GoalStatus, LoggedMeal, MacroBreakdown, MacroProgress,
    MealType, NutritionGoals, WeeklyTrend,
};
