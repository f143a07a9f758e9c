// ABOUTME: Nutrition logging models consumed by the analysis engine
// ABOUTME: MealType, LoggedMeal, and NutritionGoals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string; unknown values fall back to `Snack`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }

    /// Lowercase display name for coaching messages
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// A single logged meal entry
///
/// Produced by the logging UI and already validated for shape by the caller;
/// the engine re-checks numeric sanity at its boundary via [`validate`].
/// Multiple meals share a date; uniqueness is per logical entry and is not
/// enforced here.
///
/// [`validate`]: LoggedMeal::validate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggedMeal {
    /// Calendar day the meal was logged on
    pub date: NaiveDate,
    /// Meal slot this entry belongs to
    pub meal_type: MealType,
    /// Calories for this meal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl LoggedMeal {
    /// Check that every numeric field is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidData` naming the offending field.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        ensure_non_negative("calories", self.calories)?;
        ensure_non_negative("protein_g", self.protein_g)?;
        ensure_non_negative("carbs_g", self.carbs_g)?;
        ensure_non_negative("fat_g", self.fat_g)?;
        Ok(())
    }
}

/// Daily nutrition targets for a user profile
///
/// A fully configured profile has every target > 0. Partially configured
/// goals (zeros) are accepted; the engine guards every ratio with a
/// `goal > 0` check and skips percentage-based findings instead of dividing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionGoals {
    /// Daily calorie target
    pub daily_calories: f64,
    /// Daily protein target in grams
    pub protein_g: f64,
    /// Daily carbohydrate target in grams
    pub carbs_g: f64,
    /// Daily fat target in grams
    pub fat_g: f64,
}

impl NutritionGoals {
    /// Whether every target is configured (> 0)
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.daily_calories > 0.0 && self.protein_g > 0.0 && self.carbs_g > 0.0 && self.fat_g > 0.0
    }

    /// Check that every target is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidData` naming the offending field.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        ensure_non_negative("daily_calories", self.daily_calories)?;
        ensure_non_negative("protein_g", self.protein_g)?;
        ensure_non_negative("carbs_g", self.carbs_g)?;
        ensure_non_negative("fat_g", self.fat_g)?;
        Ok(())
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<(), AnalysisError> {
    if !value.is_finite() {
        return Err(AnalysisError::invalid_data(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(AnalysisError::invalid_data(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}
