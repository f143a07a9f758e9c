// ABOUTME: Week-over-week trend detection across tracked nutrition metrics
// ABOUTME: Emits directional trends with magnitude and significance buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Trend detection over weekly aggregates.
//!
//! The input slice is chronological: the last entry is the most recent week
//! and is compared against the one before it. Direction convention: rising
//! `goal_adherence` is improving; rising `average_calories` is declining
//! (drift away from calorie control) and falling is improving. A trend is
//! emitted only when the absolute change exceeds the minimum threshold.

use nourish_core::models::WeeklyTrend;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::TrendThresholds;
use crate::statistics;

/// Direction of a detected trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// The metric is moving the right way
    Improving,
    /// The metric is moving the wrong way
    Declining,
}

/// Significance bucket for a trend's magnitude
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendSignificance {
    /// Change above the high threshold (default > 20%)
    High,
    /// Change above the medium threshold (default > 10%)
    Medium,
    /// Any other emitted change
    Low,
}

/// Metric tracked week over week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    /// Average daily calories for the week
    AverageCalories,
    /// Weekly goal adherence (0-100)
    GoalAdherence,
}

impl TrendMetric {
    /// Display name for descriptions
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::AverageCalories => "average calories",
            Self::GoalAdherence => "goal adherence",
        }
    }

    /// Whether a rising value counts as improvement
    ///
    /// Rising adherence is improvement; rising average calories is treated
    /// as drift away from calorie control.
    #[must_use]
    pub const fn improves_when_rising(self) -> bool {
        match self {
            Self::AverageCalories => false,
            Self::GoalAdherence => true,
        }
    }

    const fn extract(self, week: &WeeklyTrend) -> f64 {
        match self {
            Self::AverageCalories => week.average_calories,
            Self::GoalAdherence => week.goal_adherence,
        }
    }
}

/// A detected week-over-week trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressTrend {
    /// Metric the trend applies to
    pub metric: TrendMetric,
    /// Direction of movement
    pub direction: TrendDirection,
    /// Absolute percentage change
    pub magnitude_percent: f64,
    /// Window the comparison covers
    pub timeframe: String,
    /// Significance bucket derived from the magnitude
    pub significance: TrendSignificance,
    /// Human-readable description
    pub description: String,
}

/// Week-over-week trend detector
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendDetector {
    thresholds: TrendThresholds,
}

impl TrendDetector {
    /// Create a detector with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom thresholds
    #[must_use]
    pub const fn with_thresholds(thresholds: TrendThresholds) -> Self {
        Self { thresholds }
    }

    /// Detect trends across the two most recent weekly aggregates
    ///
    /// Returns an empty list with fewer than two entries or when no tracked
    /// metric moved beyond the minimum change threshold.
    #[must_use]
    pub fn detect(&self, weeks: &[WeeklyTrend]) -> Vec<ProgressTrend> {
        let [.., previous, recent] = weeks else {
            debug!(week_count = weeks.len(), "not enough weeks for trends");
            return Vec::new();
        };

        let mut trends = Vec::new();
        for metric in [TrendMetric::AverageCalories, TrendMetric::GoalAdherence] {
            if let Some(trend) = self.compare(metric, previous, recent) {
                trends.push(trend);
            }
        }
        trends
    }

    fn compare(
        &self,
        metric: TrendMetric,
        previous: &WeeklyTrend,
        recent: &WeeklyTrend,
    ) -> Option<ProgressTrend> {
        let change_percent =
            statistics::relative_change_percent(metric.extract(recent), metric.extract(previous))?;
        if change_percent.abs() <= self.thresholds.min_change_percent {
            return None;
        }

        let rising = change_percent > 0.0;
        let direction = if rising == metric.improves_when_rising() {
            TrendDirection::Improving
        } else {
            TrendDirection::Declining
        };
        let significance = self.significance_of(change_percent.abs());

        let verb = if rising { "up" } else { "down" };
        let description = format!(
            "Your {} is {verb} {:.1}% versus the previous week",
            metric.display_name(),
            change_percent.abs()
        );

        Some(ProgressTrend {
            metric,
            direction,
            magnitude_percent: change_percent.abs(),
            timeframe: "week-over-week".into(),
            significance,
            description,
        })
    }

    fn significance_of(&self, magnitude: f64) -> TrendSignificance {
        if magnitude > self.thresholds.high_significance_percent {
            TrendSignificance::High
        } else if magnitude > self.thresholds.medium_significance_percent {
            TrendSignificance::Medium
        } else {
            TrendSignificance::Low
        }
    }
}
