// ABOUTME: Comprehensive analysis facade running the full pipeline end-to-end
// ABOUTME: Patterns, adherence, trends, insights, recommendations, quality in one call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Comprehensive-analysis façade.
//!
//! One entry point runs the whole pipeline and returns a single aggregate.
//! The analyzer is stateless and re-entrant: identical inputs always produce
//! structurally identical output, so callers may cache results freely.

use nourish_core::errors::AnalysisError;
use nourish_core::models::{DailyProgress, LoggedMeal, NutritionGoals, WeeklyTrend};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adherence;
use crate::aggregator;
use crate::analysis_config::AnalysisConfig;
use crate::insights::{CoachingContext, CoachingInsight, InsightGenerator};
use crate::patterns::{EatingPattern, PatternAnalyzer};
use crate::quality::{NutritionQualityScore, QualityScorer};
use crate::recommendations::{AnalysisRecommendation, RecommendationEngine};
use crate::trends::{ProgressTrend, TrendDetector};

/// The engine's single externally visible output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressAnalysisResult {
    /// Detected behavioral eating patterns
    pub eating_patterns: Vec<EatingPattern>,
    /// Strict multi-criterion adherence score in [0, 1]
    pub adherence_score: f64,
    /// Week-over-week trends that cleared the change threshold
    pub trends: Vec<ProgressTrend>,
    /// Ranked coaching insights, capped at the configured maximum
    pub insights: Vec<CoachingInsight>,
    /// Longer-horizon action plans, sorted by priority
    pub recommendations: Vec<AnalysisRecommendation>,
    /// Composite nutrition-quality score and breakdown
    pub quality: NutritionQualityScore,
}

/// Orchestrator for the full analysis pipeline
pub struct ProgressAnalyzer {
    config: AnalysisConfig,
    pattern_analyzer: PatternAnalyzer,
    trend_detector: TrendDetector,
    insight_generator: InsightGenerator,
    recommendation_engine: RecommendationEngine,
    quality_scorer: QualityScorer,
}

impl Default for ProgressAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressAnalyzer {
    /// Create an analyzer with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create an analyzer with a custom configuration
    #[must_use]
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            pattern_analyzer: PatternAnalyzer::with_thresholds(config.patterns.clone()),
            trend_detector: TrendDetector::with_thresholds(config.trends),
            insight_generator: InsightGenerator::with_config(config.insights),
            recommendation_engine: RecommendationEngine::with_config(config.recommendations),
            quality_scorer: QualityScorer::with_weights(config.quality),
            config,
        }
    }

    /// Run the full pipeline and assemble the aggregate result
    ///
    /// Inputs are validated at the boundary; inside the pipeline thin data
    /// degrades to low-confidence or empty sections instead of erroring.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidData` when a meal or goal record
    /// carries a negative or non-finite numeric field.
    pub fn perform_comprehensive_analysis(
        &self,
        meals: &[LoggedMeal],
        daily_progress: &[DailyProgress],
        weekly_trends: &[WeeklyTrend],
        goals: &NutritionGoals,
        context: &CoachingContext,
    ) -> Result<ProgressAnalysisResult, AnalysisError> {
        validate_inputs(meals, goals)?;
        debug!(
            meal_count = meals.len(),
            progress_days = daily_progress.len(),
            weekly_entries = weekly_trends.len(),
            "starting comprehensive analysis"
        );

        let eating_patterns = self.pattern_analyzer.analyze(meals, goals);
        let adherence_score =
            adherence::adherence_score_with(daily_progress, &self.config.adherence);
        let trends = self.trend_detector.detect(weekly_trends);

        let insights =
            self.insight_generator
                .generate(context, &eating_patterns, &trends, adherence_score);
        let recommendations = self.recommendation_engine.generate(
            &eating_patterns,
            &trends,
            &context.remaining,
            goals,
        );

        let daily_calories = aggregator::daily_calorie_series(meals);
        let weekend_variance = aggregator::weekend_variance(meals).unwrap_or(0.0);
        let quality = self.quality_scorer.score(
            daily_progress,
            &daily_calories,
            weekend_variance,
            adherence_score,
        );

        debug!(
            pattern_count = eating_patterns.len(),
            trend_count = trends.len(),
            insight_count = insights.len(),
            recommendation_count = recommendations.len(),
            "comprehensive analysis complete"
        );

        Ok(ProgressAnalysisResult {
            eating_patterns,
            adherence_score,
            trends,
            insights,
            recommendations,
            quality,
        })
    }
}

fn validate_inputs(meals: &[LoggedMeal], goals: &NutritionGoals) -> Result<(), AnalysisError> {
    for meal in meals {
        meal.validate()?;
    }
    goals.validate()
}
