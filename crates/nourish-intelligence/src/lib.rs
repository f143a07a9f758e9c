// ABOUTME: Nutrition analysis engine for the Nourish coaching platform
// ABOUTME: Patterns, adherence, trends, insights, recommendations, and quality scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

#![deny(unsafe_code)]

//! # Nourish Intelligence
//!
//! The nutrition progress analysis and coaching-insight engine. Given a
//! user's logged meals, goals, and historical progress, the engine detects
//! behavioral eating patterns, computes adherence and trend scores, and
//! emits prioritized coaching insights and recommendations.
//!
//! The engine is a pure function library: every call is a stateless
//! transformation of caller-owned inputs, safe to invoke concurrently and
//! referentially transparent. It performs no I/O and owns no persistence;
//! serialization of results is the caller's concern.
//!
//! ## Pipeline
//!
//! ```text
//! meals/goals/progress/trends
//!   -> aggregator + statistics
//!   -> patterns | adherence | trends      (independent)
//!   -> insights + recommendations         (consume all three)
//!   -> quality                            (progress + weekend variance)
//!   -> ProgressAnalysisResult             (assembled by the facade)
//! ```
//!
//! Use [`ProgressAnalyzer::perform_comprehensive_analysis`] for the full
//! pipeline, or call the individual analyzers directly.

/// Goal adherence scoring over daily progress snapshots
pub mod adherence;

/// Meal log aggregation into per-day and per-type series
pub mod aggregator;

/// Typed analyzer configuration with contract defaults
pub mod analysis_config;

/// Comprehensive-analysis façade
pub mod analyzer;

/// Coaching insight generation
pub mod insights;

/// Nutrition constants (energy factors, meal windows, pacing model)
pub mod nutrition_constants;

/// Behavioral eating-pattern detection
pub mod patterns;

/// Composite nutrition-quality scoring
pub mod quality;

/// Action-plan recommendation engine
pub mod recommendations;

/// Descriptive statistics for nutrition series
pub mod statistics;

/// Week-over-week trend detection
pub mod trends;

pub use adherence::{adherence_score, adherence_score_with};
pub use analysis_config::{
    AdherenceCriteria, AnalysisConfig, InsightConfig, PatternThresholds, QualityWeights,
    RecommendationConfig, TrendThresholds,
};
pub use analyzer::{ProgressAnalysisResult, ProgressAnalyzer};
pub use insights::{
    CoachingContext, CoachingInsight, InsightGenerator, InsightPriority, InsightType,
    RemainingTargets, TimeOfDay, DEFAULT_INSIGHT_CONFIDENCE,
};
pub use patterns::{
    EatingPattern, EatingPatternType, HeuristicTimingStrategy, PatternAnalyzer, PatternImpact,
    TimingConsistencyStrategy,
};
pub use quality::{NutritionQualityScore, QualityScorer};
pub use recommendations::{AnalysisRecommendation, RecommendationEngine, RecommendationType};
pub use trends::{ProgressTrend, TrendDetector, TrendDirection, TrendMetric, TrendSignificance};
