// ABOUTME: Progress tracking models derived by the external progress calculator
// ABOUTME: DailyProgress snapshots and WeeklyTrend aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a day ended relative to the calorie goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Intake landed on target
    Met,
    /// Intake finished below target
    Under,
    /// Intake finished above target
    Over,
}

/// Calorie progress for a single day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieProgress {
    /// Calories consumed so far
    pub consumed: f64,
    /// Daily calorie goal
    pub goal: f64,
    /// Calories remaining (may be negative when over goal)
    pub remaining: f64,
    /// Consumed as a percentage of goal (0-100 scale)
    pub percentage: f64,
}

impl CalorieProgress {
    /// Build from consumed and goal, deriving remaining and percentage
    #[must_use]
    pub fn new(consumed: f64, goal: f64) -> Self {
        let percentage = if goal > 0.0 {
            consumed / goal * 100.0
        } else {
            0.0
        };
        Self {
            consumed,
            goal,
            remaining: goal - consumed,
            percentage,
        }
    }

    /// Consumed/goal ratio, `None` when the goal is not configured
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        (self.goal > 0.0).then(|| self.consumed / self.goal)
    }
}

/// Progress against a single macronutrient target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroProgress {
    /// Grams consumed so far
    pub consumed: f64,
    /// Daily gram target
    pub goal: f64,
    /// Consumed as a percentage of goal (0-100 scale)
    pub percentage: f64,
}

impl MacroProgress {
    /// Build from consumed and goal, deriving the percentage
    #[must_use]
    pub fn new(consumed: f64, goal: f64) -> Self {
        let percentage = if goal > 0.0 {
            consumed / goal * 100.0
        } else {
            0.0
        };
        Self {
            consumed,
            goal,
            percentage,
        }
    }

    /// Consumed/goal ratio, `None` when the goal is not configured
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        (self.goal > 0.0).then(|| self.consumed / self.goal)
    }
}

/// Macro progress across all three macronutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    /// Protein progress
    pub protein: MacroProgress,
    /// Carbohydrate progress
    pub carbs: MacroProgress,
    /// Fat progress
    pub fats: MacroProgress,
}

/// One day's progress snapshot
///
/// Derived by the external progress calculator; the engine treats it as
/// read-only input and never recomputes the derived fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyProgress {
    /// Calendar day this snapshot covers
    pub date: NaiveDate,
    /// Calorie progress for the day
    pub calories: CalorieProgress,
    /// Macro progress for the day
    pub macros: MacroBreakdown,
    /// End-of-day goal status
    pub status: GoalStatus,
}

/// One calendar week's aggregate, ordered chronologically in input slices
///
/// Consecutive entries are assumed to represent consecutive weeks; the trend
/// detector compares the last entry (most recent) against the one before it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeeklyTrend {
    /// First day of the week this aggregate covers
    pub week_start: NaiveDate,
    /// Average daily calories over the logged days
    pub average_calories: f64,
    /// Goal adherence for the week (0-100 scale)
    pub goal_adherence: f64,
    /// Days with any logged data
    pub total_days: u32,
    /// Days on which the goal was met
    pub days_met_goal: u32,
}
