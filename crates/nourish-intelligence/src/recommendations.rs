// ABOUTME: Longer-horizon action plans built from concerning patterns and declining trends
// ABOUTME: Fixed multi-step templates keyed by pattern and trend type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Recommendation engine.
//!
//! Converts concerning eating patterns and declining, significant trends
//! into structured multi-step action plans. Templates are fixed per pattern
//! and trend type; the output is sorted by priority with the stable sort
//! preserving template order within a priority band.

use nourish_core::models::NutritionGoals;
use serde::{Deserialize, Serialize};

use crate::analysis_config::RecommendationConfig;
use crate::insights::{InsightPriority, RemainingTargets};
use crate::patterns::{EatingPattern, EatingPatternType, PatternImpact};
use crate::trends::{ProgressTrend, TrendDirection, TrendMetric, TrendSignificance};

/// Horizon of a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Act on it today
    Immediate,
    /// Build into the daily routine
    Daily,
    /// Plan at the week level
    Weekly,
    /// Longer-term habit change
    Lifestyle,
}

/// A structured, multi-step action plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecommendation {
    /// Horizon the plan operates on
    pub rec_type: RecommendationType,
    /// Ranking priority
    pub priority: InsightPriority,
    /// Short title for the plan
    pub title: String,
    /// What the plan addresses and why
    pub description: String,
    /// Ordered steps to execute
    pub action_steps: Vec<String>,
    /// Expected outcome when followed
    pub expected_impact: String,
    /// How long before the impact shows
    pub timeframe: String,
}

/// Recommendation engine over patterns, trends, and today's remaining targets
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Build the sorted recommendation list
    #[must_use]
    pub fn generate(
        &self,
        patterns: &[EatingPattern],
        trends: &[ProgressTrend],
        remaining: &RemainingTargets,
        goals: &NutritionGoals,
    ) -> Vec<AnalysisRecommendation> {
        let mut recommendations = Vec::new();

        for pattern in patterns
            .iter()
            .filter(|pattern| pattern.impact == PatternImpact::Concerning)
        {
            recommendations.push(Self::for_pattern(pattern));
        }

        for trend in trends.iter().filter(|trend| {
            trend.direction == TrendDirection::Declining
                && trend.significance != TrendSignificance::Low
        }) {
            recommendations.push(Self::for_trend(trend));
        }

        if goals.protein_g > 0.0
            && remaining.protein_g > goals.protein_g * self.config.protein_gap_ratio
        {
            recommendations.push(Self::protein_gap(remaining.protein_g));
        }

        recommendations.sort_by(|a, b| b.priority.as_rank().cmp(&a.priority.as_rank()));
        recommendations
    }

    fn for_pattern(pattern: &EatingPattern) -> AnalysisRecommendation {
        match pattern.pattern_type {
            EatingPatternType::CalorieConsistency => AnalysisRecommendation {
                rec_type: RecommendationType::Weekly,
                priority: InsightPriority::High,
                title: "Stabilize Your Daily Calories".into(),
                description: pattern.description.clone(),
                action_steps: vec![
                    "Sketch out meals for the week ahead on one day".into(),
                    "Prep breakfast and lunch in advance for busy days".into(),
                    "Log meals at the time you eat them, not at night".into(),
                    "Review the day each evening and adjust tomorrow's plan".into(),
                ],
                expected_impact: "Steadier energy and a predictable path to your goal".into(),
                timeframe: "2-3 weeks".into(),
            },
            EatingPatternType::MealTiming => AnalysisRecommendation {
                rec_type: RecommendationType::Daily,
                priority: InsightPriority::Medium,
                title: "Build a Regular Meal Schedule".into(),
                description: pattern.description.clone(),
                action_steps: vec![
                    "Pick target times for each meal and set reminders".into(),
                    "Anchor the most-skipped meal to an existing routine".into(),
                    "Keep a quick fallback option ready for rushed days".into(),
                ],
                expected_impact: "Fewer skipped meals and more even hunger through the day".into(),
                timeframe: "1-2 weeks".into(),
            },
            EatingPatternType::MacroDistribution => AnalysisRecommendation {
                rec_type: RecommendationType::Daily,
                priority: InsightPriority::Medium,
                title: "Rebalance Your Macro Split".into(),
                description: pattern.description.clone(),
                action_steps: vec![
                    "Build each meal around a protein source first".into(),
                    "Swap one refined-carb snack for a protein-based one".into(),
                    "Check your macro split at midday while there's time to adjust".into(),
                ],
                expected_impact: "A macro split that matches your plan without bigger changes"
                    .into(),
                timeframe: "2-3 weeks".into(),
            },
            EatingPatternType::MealFrequency => AnalysisRecommendation {
                rec_type: RecommendationType::Daily,
                priority: InsightPriority::High,
                title: "Stop Skipping Meals".into(),
                description: pattern.description.clone(),
                action_steps: vec![
                    "Schedule three meal slots and treat them as appointments".into(),
                    "Keep grab-and-go options stocked for days that get away from you".into(),
                    "Start with something small at each slot; volume can come later".into(),
                ],
                expected_impact: "Fewer energy dips and less evening overeating".into(),
                timeframe: "1-2 weeks".into(),
            },
            EatingPatternType::WeekendVariance => AnalysisRecommendation {
                rec_type: RecommendationType::Lifestyle,
                priority: InsightPriority::Medium,
                title: "Keep Weekends Consistent".into(),
                description: pattern.description.clone(),
                action_steps: vec![
                    "Plan weekend meals on Friday, including one treat".into(),
                    "Keep one anchor meal identical to your weekday routine".into(),
                    "Log weekend meals as you go rather than reconstructing Monday".into(),
                ],
                expected_impact: "A weekly average that stays close to your weekday baseline"
                    .into(),
                timeframe: "3-4 weeks".into(),
            },
        }
    }

    fn for_trend(trend: &ProgressTrend) -> AnalysisRecommendation {
        match trend.metric {
            TrendMetric::GoalAdherence => AnalysisRecommendation {
                rec_type: RecommendationType::Immediate,
                priority: InsightPriority::High,
                title: "Refocus on Your Daily Targets".into(),
                description: trend.description.clone(),
                action_steps: vec![
                    "Make today a fully-logged, on-target day".into(),
                    "Identify what changed versus your strong weeks".into(),
                    "Remove one friction point, such as restocking easy staples".into(),
                ],
                expected_impact: "Adherence back to where it was within a week".into(),
                timeframe: "this week".into(),
            },
            TrendMetric::AverageCalories => AnalysisRecommendation {
                rec_type: RecommendationType::Weekly,
                priority: InsightPriority::Medium,
                title: "Rein In the Calorie Drift".into(),
                description: trend.description.clone(),
                action_steps: vec![
                    "Compare this week's logs against the previous week for the extras".into(),
                    "Tighten portions on the one or two meals that grew".into(),
                    "Weigh or measure the foods you usually eyeball".into(),
                ],
                expected_impact: "Weekly average back within range of your target".into(),
                timeframe: "1-2 weeks".into(),
            },
        }
    }

    fn protein_gap(remaining_protein_g: f64) -> AnalysisRecommendation {
        AnalysisRecommendation {
            rec_type: RecommendationType::Immediate,
            priority: InsightPriority::High,
            title: "Close Today's Protein Gap".into(),
            description: format!(
                "More than half your protein target ({remaining_protein_g:.0}g) is still open today"
            ),
            action_steps: vec![
                "Add a protein-rich snack now rather than waiting for dinner".into(),
                "Build your next meal around a lean protein source".into(),
                "Use a protein shake if appetite is low".into(),
            ],
            expected_impact: "Hitting your protein floor despite the slow start".into(),
            timeframe: "today".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals() -> NutritionGoals {
        NutritionGoals {
            daily_calories: 2000.0,
            protein_g: 150.0,
            carbs_g: 200.0,
            fat_g: 67.0,
        }
    }

    fn concerning(pattern_type: EatingPatternType) -> EatingPattern {
        EatingPattern {
            pattern_type,
            description: "test finding".into(),
            frequency: 0.5,
            impact: PatternImpact::Concerning,
            suggestion: "do better".into(),
            confidence: 0.8,
        }
    }

    fn declining(metric: TrendMetric, significance: TrendSignificance) -> ProgressTrend {
        ProgressTrend {
            metric,
            direction: TrendDirection::Declining,
            magnitude_percent: 15.0,
            timeframe: "week-over-week".into(),
            significance,
            description: "test trend".into(),
        }
    }

    #[test]
    fn concerning_calorie_pattern_yields_meal_planning_plan() {
        let engine = RecommendationEngine::new();
        let patterns = vec![concerning(EatingPatternType::CalorieConsistency)];

        let recommendations =
            engine.generate(&patterns, &[], &RemainingTargets::default(), &goals());
        assert_eq!(recommendations.len(), 1);

        let plan = &recommendations[0];
        assert_eq!(plan.rec_type, RecommendationType::Weekly);
        assert_eq!(plan.timeframe, "2-3 weeks");
        assert!(plan.action_steps.len() >= 3);
        assert!(plan.action_steps[0].contains("week ahead"));
    }

    #[test]
    fn positive_patterns_produce_no_plans() {
        let engine = RecommendationEngine::new();
        let mut pattern = concerning(EatingPatternType::MealTiming);
        pattern.impact = PatternImpact::Positive;

        let recommendations =
            engine.generate(&[pattern], &[], &RemainingTargets::default(), &goals());
        assert!(recommendations.is_empty());
    }

    #[test]
    fn declining_adherence_trend_yields_immediate_refocus() {
        let engine = RecommendationEngine::new();
        let trends = vec![declining(TrendMetric::GoalAdherence, TrendSignificance::High)];

        let recommendations = engine.generate(&[], &trends, &RemainingTargets::default(), &goals());
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].rec_type, RecommendationType::Immediate);
        assert_eq!(recommendations[0].priority, InsightPriority::High);
    }

    #[test]
    fn low_significance_declines_are_ignored() {
        let engine = RecommendationEngine::new();
        let trends = vec![declining(TrendMetric::AverageCalories, TrendSignificance::Low)];

        let recommendations = engine.generate(&[], &trends, &RemainingTargets::default(), &goals());
        assert!(recommendations.is_empty());
    }

    #[test]
    fn large_protein_gap_triggers_immediate_plan() {
        let engine = RecommendationEngine::new();
        let remaining = RemainingTargets {
            calories: 900.0,
            protein_g: 90.0, // > 50% of the 150g goal
            carbs_g: 80.0,
            fat_g: 20.0,
        };

        let recommendations = engine.generate(&[], &[], &remaining, &goals());
        assert_eq!(recommendations.len(), 1);
        assert!(recommendations[0].title.contains("Protein"));
        assert_eq!(recommendations[0].timeframe, "today");
    }

    #[test]
    fn small_protein_gap_stays_quiet() {
        let engine = RecommendationEngine::new();
        let remaining = RemainingTargets {
            protein_g: 40.0,
            ..RemainingTargets::default()
        };

        let recommendations = engine.generate(&[], &[], &remaining, &goals());
        assert!(recommendations.is_empty());
    }

    #[test]
    fn output_is_sorted_by_priority() {
        let engine = RecommendationEngine::new();
        let patterns = vec![
            concerning(EatingPatternType::WeekendVariance), // Medium
            concerning(EatingPatternType::MealFrequency),   // High
        ];

        let recommendations =
            engine.generate(&patterns, &[], &RemainingTargets::default(), &goals());
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].priority, InsightPriority::High);
        assert_eq!(recommendations[1].priority, InsightPriority::Medium);
    }
}
