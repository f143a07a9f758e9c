// ABOUTME: Typed configuration for every analyzer in the engine
// ABOUTME: Threshold structs with defaults matching the documented contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Analyzer configuration.
//!
//! Each engine component takes a small threshold struct; `AnalysisConfig`
//! aggregates them for the comprehensive-analysis façade. Defaults carry the
//! documented contract values; callers tune individual fields rather than
//! magic numbers scattered through the analyzers.

use serde::{Deserialize, Serialize};

use crate::insights::DEFAULT_INSIGHT_CONFIDENCE;
use crate::nutrition_constants::frequency;

/// Thresholds for the eating-pattern analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternThresholds {
    /// Minimum logged meals before pattern analysis runs at all
    pub min_meals_for_patterns: usize,
    /// Minimum instances of a meal type before timing is scored
    pub min_instances_per_meal_type: usize,
    /// Minimum observed days before calorie consistency is scored
    pub min_days_for_calorie_consistency: usize,
    /// Findings at or below this confidence are discarded
    pub confidence_floor: f64,
    /// Timing consistency above this is a positive finding
    pub timing_positive: f64,
    /// Timing consistency below this is a concerning finding
    pub timing_concerning: f64,
    /// Calorie consistency above this is a positive finding
    pub calorie_consistency_positive: f64,
    /// Calorie consistency below this is a concerning finding
    pub calorie_consistency_concerning: f64,
    /// Goal accuracy above this is a positive finding
    pub calorie_accuracy_positive: f64,
    /// Goal accuracy below this is a concerning finding
    pub calorie_accuracy_concerning: f64,
    /// Allowed deviation between actual and target protein calorie share
    pub protein_share_tolerance: f64,
    /// Below this average meals/day the analyzer flags skipping
    pub min_meals_per_day: f64,
    /// Above this average meals/day the analyzer notes frequent eating
    pub max_meals_per_day: f64,
    /// Meal-count consistency above this is a positive finding
    pub frequency_consistency_positive: f64,
    /// Weekend/weekday calorie variance above this gets flagged
    pub weekend_variance_flag: f64,
    /// Flagged variance above this is concerning rather than neutral
    pub weekend_variance_concerning: f64,
}

impl Default for PatternThresholds {
    fn default() -> Self {
        Self {
            min_meals_for_patterns: 7,
            min_instances_per_meal_type: 3,
            min_days_for_calorie_consistency: 5,
            confidence_floor: 0.3,
            timing_positive: 0.7,
            timing_concerning: 0.4,
            calorie_consistency_positive: 0.8,
            calorie_consistency_concerning: 0.5,
            calorie_accuracy_positive: 0.9,
            calorie_accuracy_concerning: 0.7,
            protein_share_tolerance: 0.05,
            min_meals_per_day: frequency::MIN_MEALS_PER_DAY,
            max_meals_per_day: frequency::MAX_MEALS_PER_DAY,
            frequency_consistency_positive: 0.8,
            weekend_variance_flag: 0.2,
            weekend_variance_concerning: 0.3,
        }
    }
}

/// The strict multi-criterion adherence rule
///
/// A day counts toward adherence only when every criterion holds; failing a
/// single one disqualifies the day (no partial credit, no weighting).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdherenceCriteria {
    /// Lower bound on the day's calorie ratio
    pub calorie_ratio_min: f64,
    /// Upper bound on the day's calorie ratio
    pub calorie_ratio_max: f64,
    /// Minimum protein ratio
    pub protein_ratio_min: f64,
    /// Maximum distance of the calorie ratio from 1.0 (strict bound)
    pub calorie_deviation_max: f64,
}

impl Default for AdherenceCriteria {
    fn default() -> Self {
        Self {
            calorie_ratio_min: 0.8,
            calorie_ratio_max: 1.2,
            protein_ratio_min: 0.8,
            calorie_deviation_max: 0.2,
        }
    }
}

/// Thresholds for week-over-week trend detection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Minimum absolute percentage change before a trend is emitted
    pub min_change_percent: f64,
    /// Absolute change above this is medium significance
    pub medium_significance_percent: f64,
    /// Absolute change above this is high significance
    pub high_significance_percent: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            min_change_percent: 5.0,
            medium_significance_percent: 10.0,
            high_significance_percent: 20.0,
        }
    }
}

/// Configuration for coaching-insight generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Maximum number of insights returned per analysis
    pub max_insights: usize,
    /// Tie-break confidence assigned to insights without a specific one
    pub default_confidence: f64,
    /// Calorie ratio deviation treated as precision tracking
    pub calorie_precision_tolerance: f64,
    /// Evening protein deficit (grams) that triggers a timing suggestion
    pub evening_protein_deficit_g: f64,
    /// Lower bound of the balanced macro-ratio band
    pub macro_balance_min: f64,
    /// Upper bound of the balanced macro-ratio band
    pub macro_balance_max: f64,
    /// Protein ratio below this triggers a high-priority suggestion
    pub low_protein_ratio: f64,
    /// Carb ratio above this triggers an education insight
    pub high_carb_ratio: f64,
    /// Adherence above this earns a celebration
    pub adherence_celebration: f64,
    /// Adherence above this earns an encouragement
    pub adherence_encouragement: f64,
    /// Adherence below this earns a high-priority encouragement
    pub adherence_low: f64,
    /// Weekly adherence at or above this projects "on track"
    pub on_track_adherence: f64,
    /// Allowed deviation from the expected time-of-day intake fraction
    pub pacing_tolerance: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            max_insights: 8,
            default_confidence: DEFAULT_INSIGHT_CONFIDENCE,
            calorie_precision_tolerance: 0.05,
            evening_protein_deficit_g: 20.0,
            macro_balance_min: 0.8,
            macro_balance_max: 1.2,
            low_protein_ratio: 0.7,
            high_carb_ratio: 1.3,
            adherence_celebration: 0.9,
            adherence_encouragement: 0.8,
            adherence_low: 0.6,
            on_track_adherence: 0.7,
            pacing_tolerance: 0.15,
        }
    }
}

/// Configuration for the recommendation engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Remaining protein above this share of the daily goal triggers a
    /// protein-increase recommendation
    pub protein_gap_ratio: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            protein_gap_ratio: 0.5,
        }
    }
}

/// Weights and thresholds for the nutrition-quality composite score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityWeights {
    /// Weight of the macro-balance sub-score
    pub macro_balance: f64,
    /// Weight of the calorie-consistency sub-score
    pub consistency: f64,
    /// Weight of the timing sub-score
    pub timing: f64,
    /// Weight of the adherence sub-score
    pub adherence: f64,
    /// Sub-scores above this are listed as strengths
    pub strength_threshold: f64,
    /// Sub-scores below this are listed as improvements
    pub improvement_threshold: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            macro_balance: 0.3,
            consistency: 0.2,
            timing: 0.2,
            adherence: 0.3,
            strength_threshold: 0.8,
            improvement_threshold: 0.6,
        }
    }
}

/// Aggregate configuration for the comprehensive-analysis façade
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Pattern analyzer thresholds
    pub patterns: PatternThresholds,
    /// Adherence scoring criteria
    pub adherence: AdherenceCriteria,
    /// Trend detection thresholds
    pub trends: TrendThresholds,
    /// Insight generation configuration
    pub insights: InsightConfig,
    /// Recommendation engine configuration
    pub recommendations: RecommendationConfig,
    /// Quality scoring weights
    pub quality: QualityWeights,
}
