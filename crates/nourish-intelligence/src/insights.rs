// ABOUTME: Coaching insight generation from progress, patterns, and trends
// ABOUTME: Ranks celebration, suggestion, encouragement, and education messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Coaching insight generation.
//!
//! Six insight sources run over the day's progress, the detected patterns,
//! and the weekly picture; the combined list is ranked by priority with
//! confidence as the tie-break and capped at the configured maximum. Every
//! insight carries an explicit confidence: sources without a specific
//! evidence level use [`DEFAULT_INSIGHT_CONFIDENCE`] at construction rather
//! than a sort-time fallback.

use std::cmp::Ordering;

use nourish_core::models::{DailyProgress, GoalStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::InsightConfig;
use crate::nutrition_constants::pacing;
use crate::patterns::{EatingPattern, PatternImpact};
use crate::trends::{ProgressTrend, TrendDirection, TrendMetric};

/// Tie-break confidence for insights without a specific evidence level
pub const DEFAULT_INSIGHT_CONFIDENCE: f64 = 0.5;

/// Coarse time-of-day classification supplied by the caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Up to late morning
    Morning,
    /// Around midday
    Midday,
    /// Afternoon hours
    Afternoon,
    /// Dinner hours
    Evening,
    /// Late night
    Night,
}

impl TimeOfDay {
    /// Expected share of daily intake consumed by this point of the day
    ///
    /// The simple linear pacing model behind predictive insights.
    #[must_use]
    pub const fn expected_intake_fraction(self) -> f64 {
        match self {
            Self::Morning => pacing::MORNING_FRACTION,
            Self::Midday => pacing::MIDDAY_FRACTION,
            Self::Afternoon => pacing::AFTERNOON_FRACTION,
            Self::Evening => pacing::EVENING_FRACTION,
            Self::Night => pacing::NIGHT_FRACTION,
        }
    }

    /// Whether the eating day is mostly behind the user
    #[must_use]
    pub const fn is_late_day(self) -> bool {
        matches!(self, Self::Evening | Self::Night)
    }
}

/// Gap between today's goals and what has been consumed so far
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct RemainingTargets {
    /// Calories left for today (negative when over goal)
    pub calories: f64,
    /// Protein grams left for today
    pub protein_g: f64,
    /// Carbohydrate grams left for today
    pub carbs_g: f64,
    /// Fat grams left for today
    pub fat_g: f64,
}

/// Context for generating insights
///
/// Supplied by the caller (the chat-coach orchestrator) alongside the
/// historical records.
#[derive(Debug, Clone)]
pub struct CoachingContext {
    /// Today's progress snapshot, when the day has any logged data
    pub today: Option<DailyProgress>,
    /// Remaining targets for the current day
    pub remaining: RemainingTargets,
    /// Where the user is in their eating day
    pub time_of_day: TimeOfDay,
}

/// Tone of a coaching insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Recognizes a win
    Celebration,
    /// Proposes a concrete action
    Suggestion,
    /// Keeps the user going
    Encouragement,
    /// Explains the why behind a behavior
    Education,
}

/// Priority of a coaching insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    /// Surface first
    High,
    /// Normal priority
    Medium,
    /// Nice to know
    Low,
}

impl InsightPriority {
    /// Numeric rank for sorting (high = 3, medium = 2, low = 1)
    #[must_use]
    pub const fn as_rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// A single coaching insight for the chat surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingInsight {
    /// Tone of the message
    pub insight_type: InsightType,
    /// Ranking priority
    pub priority: InsightPriority,
    /// The coaching message itself
    pub message: String,
    /// Whether the user can act on it right now
    pub actionable: bool,
    /// Horizon the insight applies to
    pub timeframe: String,
    /// Goal the insight relates to, when there is a specific one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_goal: Option<String>,
    /// Evidence weight used as the sort tie-break (0-1)
    pub confidence: f64,
    /// Supporting data for the insight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Insight generator combining every coaching signal
pub struct InsightGenerator {
    config: InsightConfig,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator {
    /// Create a generator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: InsightConfig::default(),
        }
    }

    /// Create a generator with a custom configuration
    #[must_use]
    pub const fn with_config(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Generate the ranked, capped insight list
    #[must_use]
    pub fn generate(
        &self,
        context: &CoachingContext,
        patterns: &[EatingPattern],
        trends: &[ProgressTrend],
        adherence_score: f64,
    ) -> Vec<CoachingInsight> {
        let mut insights = Vec::new();

        insights.extend(self.generate_daily_progress_insights(context));
        insights.extend(self.generate_weekly_pattern_insights(adherence_score));
        insights.extend(self.generate_macro_balance_insights(context));
        insights.extend(Self::generate_behavioral_insights(patterns));
        insights.extend(self.generate_predictive_insights(context, trends, adherence_score));
        insights.extend(self.generate_status_insights(context));

        insights.sort_by(|a, b| {
            b.priority
                .as_rank()
                .cmp(&a.priority.as_rank())
                .then_with(|| {
                    b.confidence
                        .partial_cmp(&a.confidence)
                        .unwrap_or(Ordering::Equal)
                })
        });
        insights.truncate(self.config.max_insights);

        debug!(insight_count = insights.len(), "insight generation complete");
        insights
    }

    fn generate_daily_progress_insights(&self, context: &CoachingContext) -> Vec<CoachingInsight> {
        let mut insights = Vec::new();
        let Some(today) = &context.today else {
            return insights;
        };
        let Some(ratio) = today.calories.ratio() else {
            return insights;
        };

        if (ratio - 1.0).abs() <= self.config.calorie_precision_tolerance {
            insights.push(CoachingInsight {
                insight_type: InsightType::Celebration,
                priority: InsightPriority::Medium,
                message: format!(
                    "You're within {:.0}% of your calorie target today. That's precision tracking!",
                    self.config.calorie_precision_tolerance * 100.0
                ),
                actionable: false,
                timeframe: "today".into(),
                related_goal: Some("calories".into()),
                confidence: 0.9,
                data: Some(serde_json::json!({
                    "consumed": today.calories.consumed,
                    "goal": today.calories.goal,
                })),
            });
        }

        if context.remaining.protein_g > self.config.evening_protein_deficit_g
            && context.time_of_day.is_late_day()
        {
            insights.push(CoachingInsight {
                insight_type: InsightType::Suggestion,
                priority: InsightPriority::High,
                message: format!(
                    "You still need {:.0}g of protein today. A protein-focused dinner or snack closes the gap.",
                    context.remaining.protein_g
                ),
                actionable: true,
                timeframe: "today".into(),
                related_goal: Some("protein".into()),
                confidence: 0.8,
                data: None,
            });
        }

        // Pacing from the remaining-calorie ratio
        if today.calories.goal > 0.0 {
            let remaining_ratio = context.remaining.calories / today.calories.goal;
            if context.time_of_day == TimeOfDay::Evening && remaining_ratio > 0.4 {
                insights.push(CoachingInsight {
                    insight_type: InsightType::Suggestion,
                    priority: InsightPriority::Medium,
                    message: format!(
                        "Over {:.0}% of your calories are still available. Plan a substantial, balanced dinner.",
                        remaining_ratio * 100.0
                    ),
                    actionable: true,
                    timeframe: "today".into(),
                    related_goal: Some("calories".into()),
                    confidence: 0.7,
                    data: None,
                });
            } else if context.time_of_day == TimeOfDay::Afternoon && remaining_ratio < 0.2 {
                insights.push(CoachingInsight {
                    insight_type: InsightType::Suggestion,
                    priority: InsightPriority::Medium,
                    message: "Most of today's calories are already in. Keep the evening light to stay on target.".into(),
                    actionable: true,
                    timeframe: "today".into(),
                    related_goal: Some("calories".into()),
                    confidence: 0.7,
                    data: None,
                });
            }
        }

        insights
    }

    fn generate_weekly_pattern_insights(&self, adherence_score: f64) -> Vec<CoachingInsight> {
        let adherence_percent = adherence_score * 100.0;
        let mut insights = Vec::new();

        if adherence_score > self.config.adherence_celebration {
            insights.push(CoachingInsight {
                insight_type: InsightType::Celebration,
                priority: InsightPriority::Medium,
                message: format!(
                    "You fully hit your targets on {adherence_percent:.0}% of recent days. Outstanding consistency!"
                ),
                actionable: false,
                timeframe: "this week".into(),
                related_goal: None,
                confidence: 0.9,
                data: None,
            });
        } else if adherence_score > self.config.adherence_encouragement {
            insights.push(CoachingInsight {
                insight_type: InsightType::Encouragement,
                priority: InsightPriority::Medium,
                message: format!(
                    "Strong week so far: {adherence_percent:.0}% of days fully on target. One more good day tips the balance."
                ),
                actionable: false,
                timeframe: "this week".into(),
                related_goal: None,
                confidence: 0.8,
                data: None,
            });
        } else if adherence_score < self.config.adherence_low {
            insights.push(CoachingInsight {
                insight_type: InsightType::Encouragement,
                priority: InsightPriority::High,
                message: format!(
                    "Targets landed on {adherence_percent:.0}% of recent days. Let's reset with one focused, fully-logged day."
                ),
                actionable: true,
                timeframe: "this week".into(),
                related_goal: None,
                confidence: 0.8,
                data: None,
            });
        }

        insights
    }

    fn generate_macro_balance_insights(&self, context: &CoachingContext) -> Vec<CoachingInsight> {
        let mut insights = Vec::new();
        let Some(today) = &context.today else {
            return insights;
        };

        let ratios = [
            today.macros.protein.ratio(),
            today.macros.carbs.ratio(),
            today.macros.fats.ratio(),
        ];

        let all_balanced = ratios.iter().all(|ratio| {
            ratio.is_some_and(|value| {
                value >= self.config.macro_balance_min && value <= self.config.macro_balance_max
            })
        });
        if all_balanced {
            insights.push(CoachingInsight {
                insight_type: InsightType::Encouragement,
                priority: InsightPriority::Medium,
                message: "Protein, carbs, and fat are all tracking in balance today. Great plate construction.".into(),
                actionable: false,
                timeframe: "today".into(),
                related_goal: Some("macros".into()),
                confidence: 0.8,
                data: None,
            });
        }

        if let Some(protein_ratio) = today.macros.protein.ratio() {
            if protein_ratio < self.config.low_protein_ratio {
                insights.push(CoachingInsight {
                    insight_type: InsightType::Suggestion,
                    priority: InsightPriority::High,
                    message: format!(
                        "Protein is at {:.0}% of its target. Prioritize a protein source in your next meal.",
                        protein_ratio * 100.0
                    ),
                    actionable: true,
                    timeframe: "today".into(),
                    related_goal: Some("protein".into()),
                    confidence: 0.8,
                    data: None,
                });
            }
        }

        if let Some(carb_ratio) = today.macros.carbs.ratio() {
            if carb_ratio > self.config.high_carb_ratio {
                insights.push(CoachingInsight {
                    insight_type: InsightType::Education,
                    priority: InsightPriority::Medium,
                    message: format!(
                        "Carbs are at {:.0}% of target. Pairing carbs with protein or fat slows digestion and steadies energy.",
                        carb_ratio * 100.0
                    ),
                    actionable: false,
                    timeframe: "today".into(),
                    related_goal: Some("carbs".into()),
                    confidence: self.config.default_confidence,
                    data: None,
                });
            }
        }

        insights
    }

    fn generate_behavioral_insights(patterns: &[EatingPattern]) -> Vec<CoachingInsight> {
        let mut insights = Vec::new();

        if let Some(concerning) = patterns
            .iter()
            .find(|pattern| pattern.impact == PatternImpact::Concerning)
        {
            insights.push(CoachingInsight {
                insight_type: InsightType::Suggestion,
                priority: InsightPriority::High,
                message: format!("{}. {}", concerning.description, concerning.suggestion),
                actionable: true,
                timeframe: "this week".into(),
                related_goal: None,
                confidence: concerning.confidence,
                data: None,
            });
        }

        if let Some(positive) = patterns
            .iter()
            .find(|pattern| pattern.impact == PatternImpact::Positive)
        {
            insights.push(CoachingInsight {
                insight_type: InsightType::Celebration,
                priority: InsightPriority::Low,
                message: format!("{}. Keep that habit going!", positive.description),
                actionable: false,
                timeframe: "this week".into(),
                related_goal: None,
                confidence: positive.confidence,
                data: None,
            });
        }

        insights
    }

    fn generate_predictive_insights(
        &self,
        context: &CoachingContext,
        trends: &[ProgressTrend],
        adherence_score: f64,
    ) -> Vec<CoachingInsight> {
        let mut insights = Vec::new();

        if let Some(today) = &context.today {
            if let Some(ratio) = today.calories.ratio() {
                let expected = context.time_of_day.expected_intake_fraction();
                if ratio > expected + self.config.pacing_tolerance {
                    insights.push(CoachingInsight {
                        insight_type: InsightType::Suggestion,
                        priority: InsightPriority::Medium,
                        message: format!(
                            "You've used {:.0}% of today's calories, ahead of the usual {:.0}% by now. Lighter choices from here keep you on target.",
                            ratio * 100.0,
                            expected * 100.0
                        ),
                        actionable: true,
                        timeframe: "today".into(),
                        related_goal: Some("calories".into()),
                        confidence: 0.6,
                        data: None,
                    });
                } else if ratio < expected - self.config.pacing_tolerance
                    && !context.time_of_day.is_late_day()
                {
                    insights.push(CoachingInsight {
                        insight_type: InsightType::Encouragement,
                        priority: InsightPriority::Low,
                        message: "You're pacing comfortably under budget with plenty of the day left.".into(),
                        actionable: false,
                        timeframe: "today".into(),
                        related_goal: Some("calories".into()),
                        confidence: 0.6,
                        data: None,
                    });
                }
            }
        }

        // Weekly projection from the adherence level, sharpened by a
        // declining adherence trend when one was detected
        let adherence_declining = trends.iter().any(|trend| {
            trend.metric == TrendMetric::GoalAdherence
                && trend.direction == TrendDirection::Declining
        });
        if adherence_score >= self.config.on_track_adherence && !adherence_declining {
            insights.push(CoachingInsight {
                insight_type: InsightType::Encouragement,
                priority: InsightPriority::Low,
                message: "At this pace you're on track to finish the week at goal.".into(),
                actionable: false,
                timeframe: "this week".into(),
                related_goal: None,
                confidence: 0.6,
                data: None,
            });
        } else if adherence_score < self.config.on_track_adherence {
            let message = if adherence_declining {
                "This week is trending away from your goal, and adherence has been slipping week over week. Today is the day to turn it."
            } else {
                "This week is at risk of missing your goal. A couple of on-target days would turn it around."
            };
            insights.push(CoachingInsight {
                insight_type: InsightType::Suggestion,
                priority: InsightPriority::Medium,
                message: message.into(),
                actionable: true,
                timeframe: "this week".into(),
                related_goal: None,
                confidence: 0.6,
                data: None,
            });
        }

        insights
    }

    /// Status-based insights retained for compatibility with the original
    /// coaching surface
    fn generate_status_insights(&self, context: &CoachingContext) -> Vec<CoachingInsight> {
        let mut insights = Vec::new();
        let Some(today) = &context.today else {
            return insights;
        };

        match today.status {
            GoalStatus::Met => insights.push(CoachingInsight {
                insight_type: InsightType::Celebration,
                priority: InsightPriority::Low,
                message: "Calorie goal met for the day. Well done!".into(),
                actionable: false,
                timeframe: "today".into(),
                related_goal: Some("calories".into()),
                confidence: self.config.default_confidence,
                data: None,
            }),
            GoalStatus::Over => insights.push(CoachingInsight {
                insight_type: InsightType::Education,
                priority: InsightPriority::Low,
                message: format!(
                    "You're {:.0} kcal over today. One day doesn't define a week; tomorrow is a clean slate.",
                    -context.remaining.calories
                ),
                actionable: false,
                timeframe: "today".into(),
                related_goal: Some("calories".into()),
                confidence: self.config.default_confidence,
                data: None,
            }),
            GoalStatus::Under => {
                if context.time_of_day.is_late_day() && context.remaining.calories > 0.0 {
                    insights.push(CoachingInsight {
                        insight_type: InsightType::Suggestion,
                        priority: InsightPriority::Low,
                        message: format!(
                            "{:.0} kcal still available today if you're hungry this evening.",
                            context.remaining.calories
                        ),
                        actionable: true,
                        timeframe: "today".into(),
                        related_goal: Some("calories".into()),
                        confidence: self.config.default_confidence,
                        data: None,
                    });
                }
            }
        }

        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nourish_core::models::{CalorieProgress, MacroBreakdown, MacroProgress};

    fn progress(consumed: f64, protein: f64, status: GoalStatus) -> DailyProgress {
        DailyProgress {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            calories: CalorieProgress::new(consumed, 2000.0),
            macros: MacroBreakdown {
                protein: MacroProgress::new(protein, 150.0),
                carbs: MacroProgress::new(200.0, 200.0),
                fats: MacroProgress::new(65.0, 67.0),
            },
            status,
        }
    }

    fn context(consumed: f64, protein: f64, time_of_day: TimeOfDay) -> CoachingContext {
        let status = if consumed < 1900.0 {
            GoalStatus::Under
        } else if consumed > 2100.0 {
            GoalStatus::Over
        } else {
            GoalStatus::Met
        };
        CoachingContext {
            today: Some(progress(consumed, protein, status)),
            remaining: RemainingTargets {
                calories: 2000.0 - consumed,
                protein_g: 150.0 - protein,
                carbs_g: 0.0,
                fat_g: 2.0,
            },
            time_of_day,
        }
    }

    #[test]
    fn output_is_capped_and_sorted_by_priority() {
        let generator = InsightGenerator::new();
        let patterns = vec![
            EatingPattern {
                pattern_type: crate::patterns::EatingPatternType::CalorieConsistency,
                description: "Daily calories swing by 60% day to day".into(),
                frequency: 0.6,
                impact: PatternImpact::Concerning,
                suggestion: "Plan meals ahead".into(),
                confidence: 0.8,
            },
            EatingPattern {
                pattern_type: crate::patterns::EatingPatternType::MealFrequency,
                description: "You eat a steady 3.0 meals per day".into(),
                frequency: 1.0,
                impact: PatternImpact::Positive,
                suggestion: "Keep it".into(),
                confidence: 0.7,
            },
        ];

        let insights =
            generator.generate(&context(1200.0, 60.0, TimeOfDay::Evening), &patterns, &[], 0.4);

        assert!(insights.len() <= 8);
        assert!(insights
            .windows(2)
            .all(|pair| pair[0].priority.as_rank() >= pair[1].priority.as_rank()));
    }

    #[test]
    fn precision_day_earns_celebration() {
        let generator = InsightGenerator::new();
        let insights =
            generator.generate(&context(2040.0, 150.0, TimeOfDay::Night), &[], &[], 0.85);

        assert!(insights.iter().any(|insight| {
            insight.insight_type == InsightType::Celebration
                && insight.message.contains("precision")
        }));
    }

    #[test]
    fn evening_protein_deficit_triggers_high_priority_suggestion() {
        let generator = InsightGenerator::new();
        let insights = generator.generate(&context(1500.0, 80.0, TimeOfDay::Evening), &[], &[], 0.85);

        let protein = insights
            .iter()
            .find(|insight| insight.related_goal.as_deref() == Some("protein"))
            .expect("protein insight");
        assert_eq!(protein.priority, InsightPriority::High);
        assert!(protein.actionable);
        assert!(protein.message.contains("70g"));
    }

    #[test]
    fn morning_protein_deficit_stays_quiet() {
        let generator = InsightGenerator::new();
        let insights = generator.generate(&context(600.0, 30.0, TimeOfDay::Morning), &[], &[], 0.85);

        assert!(!insights
            .iter()
            .any(|insight| insight.message.contains("protein-focused dinner")));
    }

    #[test]
    fn adherence_banding_matches_contract() {
        let generator = InsightGenerator::new();
        let ctx = context(2000.0, 150.0, TimeOfDay::Night);

        let celebrated = generator.generate(&ctx, &[], &[], 0.95);
        assert!(celebrated
            .iter()
            .any(|i| i.insight_type == InsightType::Celebration && i.message.contains("95%")));

        let encouraged = generator.generate(&ctx, &[], &[], 0.85);
        assert!(encouraged
            .iter()
            .any(|i| i.insight_type == InsightType::Encouragement && i.message.contains("85%")));

        let low = generator.generate(&ctx, &[], &[], 0.4);
        let reset = low
            .iter()
            .find(|i| i.insight_type == InsightType::Encouragement && i.message.contains("40%"))
            .expect("low-adherence encouragement");
        assert_eq!(reset.priority, InsightPriority::High);
    }

    #[test]
    fn balanced_macros_earn_encouragement() {
        let generator = InsightGenerator::new();
        let insights = generator.generate(&context(2000.0, 150.0, TimeOfDay::Night), &[], &[], 0.85);

        assert!(insights
            .iter()
            .any(|insight| insight.message.contains("balance")));
    }

    #[test]
    fn every_insight_has_explicit_confidence() {
        let generator = InsightGenerator::new();
        let insights = generator.generate(&context(1200.0, 60.0, TimeOfDay::Evening), &[], &[], 0.4);

        assert!(!insights.is_empty());
        assert!(insights
            .iter()
            .all(|insight| (0.0..=1.0).contains(&insight.confidence)));
    }

    #[test]
    fn missing_today_still_produces_weekly_insights() {
        let generator = InsightGenerator::new();
        let ctx = CoachingContext {
            today: None,
            remaining: RemainingTargets::default(),
            time_of_day: TimeOfDay::Morning,
        };

        let insights = generator.generate(&ctx, &[], &[], 0.95);
        assert!(!insights.is_empty());
        assert!(insights
            .iter()
            .all(|insight| insight.timeframe == "this week"));
    }
}
