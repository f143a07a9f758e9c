// ABOUTME: Composite nutrition-quality scoring with strengths and improvements
// ABOUTME: Weighted blend of macro balance, consistency, timing, and adherence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Nutrition-quality scoring.
//!
//! Composes four sub-scores into one overall score: macro balance (how close
//! each macro ratio sits to 1.0), calorie consistency, timing (weekend
//! alignment), and adherence. Sub-scores above the strength threshold are
//! reported as strengths, below the improvement threshold as improvements.

use nourish_core::models::DailyProgress;
use serde::{Deserialize, Serialize};

use crate::analysis_config::QualityWeights;
use crate::statistics;

/// Composite quality score plus the strengths/improvements breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionQualityScore {
    /// Weighted overall score in [0, 1]
    pub overall: f64,
    /// Macro-balance sub-score in [0, 1]
    pub macro_balance: f64,
    /// Calorie-consistency sub-score in [0, 1]
    pub consistency: f64,
    /// Timing (weekend alignment) sub-score in [0, 1]
    pub timing: f64,
    /// Adherence sub-score in [0, 1]
    pub adherence: f64,
    /// Sub-scores above the strength threshold
    pub strengths: Vec<String>,
    /// Sub-scores below the improvement threshold
    pub improvements: Vec<String>,
}

/// Quality scorer over progress history and aggregate measures
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityScorer {
    weights: QualityWeights,
}

impl QualityScorer {
    /// Create a scorer with the default weights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom weights
    #[must_use]
    pub const fn with_weights(weights: QualityWeights) -> Self {
        Self { weights }
    }

    /// Score nutrition quality from the history and aggregate inputs
    ///
    /// `weekend_variance` is the relative weekday/weekend calorie difference
    /// (0 when unknown); `adherence` is the strict multi-criterion score.
    #[must_use]
    pub fn score(
        &self,
        progress: &[DailyProgress],
        daily_calories: &[f64],
        weekend_variance: f64,
        adherence: f64,
    ) -> NutritionQualityScore {
        let macro_balance = macro_balance_score(progress);
        let consistency = statistics::consistency_score(daily_calories);
        let timing = (1.0 - 2.0 * weekend_variance.min(0.5)).clamp(0.0, 1.0);
        let adherence = adherence.clamp(0.0, 1.0);

        let overall = (self.weights.macro_balance * macro_balance
            + self.weights.consistency * consistency
            + self.weights.timing * timing
            + self.weights.adherence * adherence)
            .clamp(0.0, 1.0);

        let mut strengths = Vec::new();
        let mut improvements = Vec::new();
        let breakdown = [
            (
                macro_balance,
                "Macro split consistently close to targets",
                "Macro split drifts from its targets",
            ),
            (
                consistency,
                "Day-to-day calories are steady",
                "Daily calories vary widely",
            ),
            (
                timing,
                "Weekday and weekend intake stay aligned",
                "Weekend intake diverges from weekdays",
            ),
            (
                adherence,
                "Daily targets are met reliably",
                "Daily targets are missed too often",
            ),
        ];
        for (value, strength, improvement) in breakdown {
            if value > self.weights.strength_threshold {
                strengths.push(strength.into());
            } else if value < self.weights.improvement_threshold {
                improvements.push(improvement.into());
            }
        }

        NutritionQualityScore {
            overall,
            macro_balance,
            consistency,
            timing,
            adherence,
            strengths,
            improvements,
        }
    }
}

/// Mean closeness of every available macro ratio to 1.0, clamped to [0, 1]
///
/// Days or macros without a configured goal contribute nothing; with no
/// usable ratios at all the score is 0.
fn macro_balance_score(progress: &[DailyProgress]) -> f64 {
    let mut closeness = Vec::new();
    for day in progress {
        for ratio in [
            day.macros.protein.ratio(),
            day.macros.carbs.ratio(),
            day.macros.fats.ratio(),
        ]
        .into_iter()
        .flatten()
        {
            closeness.push((1.0 - (ratio - 1.0).abs()).clamp(0.0, 1.0));
        }
    }
    if closeness.is_empty() {
        return 0.0;
    }
    statistics::mean(&closeness).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nourish_core::models::{CalorieProgress, GoalStatus, MacroBreakdown, MacroProgress};

    fn day(protein_ratio: f64) -> DailyProgress {
        DailyProgress {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            calories: CalorieProgress::new(2000.0, 2000.0),
            macros: MacroBreakdown {
                protein: MacroProgress::new(150.0 * protein_ratio, 150.0),
                carbs: MacroProgress::new(200.0, 200.0),
                fats: MacroProgress::new(67.0, 67.0),
            },
            status: GoalStatus::Met,
        }
    }

    #[test]
    fn overall_is_the_documented_weighted_sum() {
        let scorer = QualityScorer::new();
        // Perfect macros, perfect consistency, no weekend variance
        let progress = vec![day(1.0), day(1.0)];
        let calories = [2000.0, 2000.0];

        let score = scorer.score(&progress, &calories, 0.0, 1.0);
        assert!((score.macro_balance - 1.0).abs() < f64::EPSILON);
        assert!((score.consistency - 1.0).abs() < f64::EPSILON);
        assert!((score.timing - 1.0).abs() < f64::EPSILON);
        assert!((score.overall - 1.0).abs() < f64::EPSILON);

        // Hand-computed blend: 0.3*1.0 + 0.2*1.0 + 0.2*0.0 + 0.3*0.5
        let partial = scorer.score(&progress, &calories, 0.6, 0.5);
        assert!((partial.overall - 0.65).abs() < 1e-9);
    }

    #[test]
    fn timing_floors_at_zero_for_large_variance() {
        let scorer = QualityScorer::new();
        let score = scorer.score(&[], &[], 0.9, 0.0);
        assert!((score.timing - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn thresholds_drive_strengths_and_improvements() {
        let scorer = QualityScorer::new();
        let progress = vec![day(1.0)];

        let score = scorer.score(&progress, &[2000.0, 2000.0], 0.45, 1.0);
        assert!(score
            .strengths
            .iter()
            .any(|s| s.contains("Macro split")));
        assert!(score
            .strengths
            .iter()
            .any(|s| s.contains("targets are met")));
        // timing = 1 - 2*0.45 = 0.1 < 0.6
        assert!(score
            .improvements
            .iter()
            .any(|s| s.contains("Weekend intake")));
    }

    #[test]
    fn off_target_macros_lower_the_balance_score() {
        let scorer = QualityScorer::new();
        let on_target = scorer.score(&[day(1.0)], &[2000.0], 0.0, 1.0);
        let off_target = scorer.score(&[day(0.5)], &[2000.0], 0.0, 1.0);
        assert!(off_target.macro_balance < on_target.macro_balance);
    }

    #[test]
    fn empty_history_stays_in_bounds() {
        let scorer = QualityScorer::new();
        let score = scorer.score(&[], &[], 0.0, 0.0);
        assert!((0.0..=1.0).contains(&score.overall));
        assert!((score.macro_balance - 0.0).abs() < f64::EPSILON);
    }
}
