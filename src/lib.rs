// ABOUTME: Main library entry point for the Nourish analysis platform
// ABOUTME: Re-exports the foundation and intelligence crates under one path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

#![deny(unsafe_code)]

//! # Nourish
//!
//! Nutrition progress analysis and coaching-insight engine for the Nourish
//! app. The engine receives already-validated meal logs, goals, and progress
//! history from the caller and returns structured analysis objects; it
//! fetches, stores, and renders nothing itself.
//!
//! ## Architecture
//!
//! The workspace follows a foundation/engine split:
//! - **`nourish-core`**: slow-changing data models and error types
//! - **`nourish-intelligence`**: the analyzers themselves
//!
//! This crate re-exports both so consumers keep a single import path.
//!
//! ## Example Usage
//!
//! ```rust
//! use nourish::intelligence::{CoachingContext, ProgressAnalyzer, RemainingTargets, TimeOfDay};
//! use nourish::models::NutritionGoals;
//!
//! let analyzer = ProgressAnalyzer::new();
//! let goals = NutritionGoals {
//!     daily_calories: 2000.0,
//!     protein_g: 150.0,
//!     carbs_g: 200.0,
//!     fat_g: 67.0,
//! };
//! let context = CoachingContext {
//!     today: None,
//!     remaining: RemainingTargets::default(),
//!     time_of_day: TimeOfDay::Morning,
//! };
//!
//! let result = analyzer
//!     .perform_comprehensive_analysis(&[], &[], &[], &goals, &context)
//!     .expect("valid inputs");
//! assert!(result.insights.len() <= 8);
//! ```

/// Analysis engine re-exports (`ProgressAnalyzer`, pattern/trend/insight types)
pub mod intelligence;

/// Data model re-exports (`LoggedMeal`, `NutritionGoals`, progress records)
pub mod models;

pub use nourish_core::errors::{AnalysisError, AnalysisResult};
