// ABOUTME: Behavioral eating-pattern detection over aggregated meal history
// ABOUTME: Timing, calorie consistency, macro split, frequency, and weekend variance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

#![allow(clippy::cast_precision_loss)] // Safe: meal and day counts are small

//! Eating-pattern analysis.
//!
//! Five independent sub-analyses run over the aggregated meal history and
//! their findings are concatenated, then filtered to confidence above the
//! configured floor. With fewer than the minimum meals the analyzer degrades
//! to a single explicit insufficient-data placeholder instead of failing.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use nourish_core::models::{LoggedMeal, MealType, NutritionGoals};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::{self, DailyTotals};
use crate::analysis_config::PatternThresholds;
use crate::nutrition_constants::{energy, meal_windows};
use crate::statistics;

/// Category of a detected eating pattern
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EatingPatternType {
    /// Regularity of individual meal slots
    MealTiming,
    /// Day-to-day calorie stability and goal accuracy
    CalorieConsistency,
    /// Calorie share of protein/carbs/fat vs the target split
    MacroDistribution,
    /// Eating occasions per day
    MealFrequency,
    /// Weekday vs weekend intake difference
    WeekendVariance,
}

/// Whether a pattern helps, hinders, or is merely notable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PatternImpact {
    /// Supports the user's goals
    Positive,
    /// Worth knowing, not a problem
    Neutral,
    /// Works against the user's goals
    Concerning,
}

/// A detected behavioral eating pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EatingPattern {
    /// Pattern category
    pub pattern_type: EatingPatternType,
    /// Human-readable description of the finding
    pub description: String,
    /// How often the pattern occurs (0-1)
    pub frequency: f64,
    /// Effect on the user's goals
    pub impact: PatternImpact,
    /// Coaching suggestion tied to the finding
    pub suggestion: String,
    /// Evidence weight behind the finding (0-1)
    pub confidence: f64,
}

/// Strategy seam for scoring how consistently a meal slot is timed
///
/// `LoggedMeal` carries a calendar day but no clock time, so the default
/// implementation is a placeholder heuristic. A future strategy backed by
/// real timestamps (actual clustering of eating times) can replace it
/// without changing the analyzer contract.
pub trait TimingConsistencyStrategy {
    /// Score timing consistency for one meal slot in [0, 1]
    fn timing_consistency(
        &self,
        meal_type: MealType,
        meals: &[&LoggedMeal],
        observed_days: usize,
    ) -> f64;
}

/// Placeholder strategy: day coverage stands in for clock-time regularity
///
/// Scores a meal slot by the share of observed days on which it appears. A
/// breakfast logged every day scores 1.0; one logged every third day scores
/// about 0.33.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTimingStrategy;

impl TimingConsistencyStrategy for HeuristicTimingStrategy {
    fn timing_consistency(
        &self,
        _meal_type: MealType,
        meals: &[&LoggedMeal],
        observed_days: usize,
    ) -> f64 {
        if observed_days == 0 {
            return 0.0;
        }
        let days_with_slot: BTreeSet<NaiveDate> = meals.iter().map(|meal| meal.date).collect();
        (days_with_slot.len() as f64 / observed_days as f64).clamp(0.0, 1.0)
    }
}

/// Behavioral pattern analyzer over a user's meal history
pub struct PatternAnalyzer<S: TimingConsistencyStrategy = HeuristicTimingStrategy> {
    strategy: S,
    thresholds: PatternThresholds,
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternAnalyzer {
    /// Create an analyzer with the default placeholder timing strategy
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategy: HeuristicTimingStrategy,
            thresholds: PatternThresholds::default(),
        }
    }

    /// Create an analyzer with custom thresholds
    #[must_use]
    pub fn with_thresholds(thresholds: PatternThresholds) -> Self {
        Self {
            strategy: HeuristicTimingStrategy,
            thresholds,
        }
    }
}

impl<S: TimingConsistencyStrategy> PatternAnalyzer<S> {
    /// Create an analyzer with a custom timing strategy
    #[must_use]
    pub fn with_strategy(strategy: S, thresholds: PatternThresholds) -> Self {
        Self {
            strategy,
            thresholds,
        }
    }

    /// Detect eating patterns across the full meal history
    ///
    /// Returns a single low-confidence placeholder below the minimum meal
    /// count; otherwise runs all five sub-analyses and filters the combined
    /// findings to confidence above the configured floor.
    #[must_use]
    pub fn analyze(&self, meals: &[LoggedMeal], goals: &NutritionGoals) -> Vec<EatingPattern> {
        if meals.len() < self.thresholds.min_meals_for_patterns {
            debug!(
                meal_count = meals.len(),
                "insufficient meals for pattern analysis"
            );
            return vec![Self::insufficient_data_pattern()];
        }

        let daily: Vec<DailyTotals> = aggregator::aggregate_daily(meals).into_values().collect();

        let mut patterns = Vec::new();
        patterns.extend(self.analyze_meal_timing(meals));
        patterns.extend(self.analyze_calorie_consistency(&daily, goals));
        patterns.extend(self.analyze_macro_distribution(&daily, goals));
        patterns.extend(self.analyze_meal_frequency(&daily));
        patterns.extend(self.analyze_weekend_variance(meals));

        patterns.retain(|pattern| pattern.confidence > self.thresholds.confidence_floor);
        debug!(pattern_count = patterns.len(), "pattern analysis complete");
        patterns
    }

    fn insufficient_data_pattern() -> EatingPattern {
        EatingPattern {
            pattern_type: EatingPatternType::MealFrequency,
            description: "Not enough logged meals to detect eating patterns yet".into(),
            frequency: 0.0,
            impact: PatternImpact::Neutral,
            suggestion: "Keep logging meals for at least a week to unlock pattern analysis".into(),
            confidence: 0.1,
        }
    }

    fn analyze_meal_timing(&self, meals: &[LoggedMeal]) -> Vec<EatingPattern> {
        let groups = aggregator::group_by_meal_type(meals);
        let days = aggregator::observed_days(meals);

        let mut findings = Vec::new();
        // Fixed slot order keeps output deterministic across runs
        for meal_type in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            let Some(group) = groups.get(&meal_type) else {
                continue;
            };
            if group.len() < self.thresholds.min_instances_per_meal_type {
                continue;
            }

            let consistency = self.strategy.timing_consistency(meal_type, group, days);
            let slot = meal_type.display_name();
            let (start, end) = optimal_window(meal_type);

            if consistency > self.thresholds.timing_positive {
                findings.push(EatingPattern {
                    pattern_type: EatingPatternType::MealTiming,
                    description: format!("Your {slot} shows up consistently from day to day"),
                    frequency: consistency,
                    impact: PatternImpact::Positive,
                    suggestion: format!("Keep your current {slot} routine going"),
                    confidence: 0.6,
                });
            } else if consistency < self.thresholds.timing_concerning {
                findings.push(EatingPattern {
                    pattern_type: EatingPatternType::MealTiming,
                    description: format!(
                        "Your {slot} is irregular, appearing on only some of your logged days"
                    ),
                    frequency: consistency,
                    impact: PatternImpact::Concerning,
                    suggestion: format!(
                        "Aim to eat {slot} between {start}:00 and {end}:00 on most days"
                    ),
                    confidence: 0.6,
                });
            }
        }
        findings
    }

    fn analyze_calorie_consistency(
        &self,
        daily: &[DailyTotals],
        goals: &NutritionGoals,
    ) -> Vec<EatingPattern> {
        if daily.len() < self.thresholds.min_days_for_calorie_consistency {
            return Vec::new();
        }

        let series: Vec<f64> = daily.iter().map(|totals| totals.calories).collect();
        let consistency = statistics::consistency_score(&series);
        let average = statistics::mean(&series);
        let target = goals.daily_calories;
        let accuracy = (target > 0.0).then(|| 1.0 - (average - target).abs() / target);

        let mut findings = Vec::new();

        let accuracy_is_positive =
            accuracy.is_some_and(|value| value > self.thresholds.calorie_accuracy_positive);
        if accuracy_is_positive {
            let deviation_percent = (1.0 - accuracy.unwrap_or(1.0)) * 100.0;
            findings.push(EatingPattern {
                pattern_type: EatingPatternType::CalorieConsistency,
                description: format!(
                    "Daily average of {average:.0} kcal tracks within {deviation_percent:.0}% of your {target:.0} kcal goal"
                ),
                frequency: accuracy.unwrap_or(1.0).clamp(0.0, 1.0),
                impact: PatternImpact::Positive,
                suggestion: "Your calorie targeting is excellent, keep logging the way you do".into(),
                confidence: 0.85,
            });
        } else if consistency > self.thresholds.calorie_consistency_positive {
            let variation_percent = (1.0 - consistency) * 100.0;
            findings.push(EatingPattern {
                pattern_type: EatingPatternType::CalorieConsistency,
                description: format!(
                    "Daily calories vary by only {variation_percent:.0}% day to day"
                ),
                frequency: consistency,
                impact: PatternImpact::Positive,
                suggestion: "Steady intake supports steady progress, keep it up".into(),
                confidence: 0.85,
            });
        }

        if consistency < self.thresholds.calorie_consistency_concerning {
            let variation_percent = (1.0 - consistency) * 100.0;
            findings.push(EatingPattern {
                pattern_type: EatingPatternType::CalorieConsistency,
                description: format!("Daily calories swing by {variation_percent:.0}% day to day"),
                frequency: 1.0 - consistency.clamp(0.0, 1.0),
                impact: PatternImpact::Concerning,
                suggestion: "Plan meals for the week ahead to smooth out big daily swings".into(),
                confidence: 0.8,
            });
        }

        if let Some(accuracy_value) = accuracy {
            if accuracy_value < self.thresholds.calorie_accuracy_concerning {
                let difference = average - target;
                let direction = if difference >= 0.0 { "over" } else { "under" };
                findings.push(EatingPattern {
                    pattern_type: EatingPatternType::CalorieConsistency,
                    description: format!(
                        "Averaging {:.0} kcal {direction} your {target:.0} kcal daily target",
                        difference.abs()
                    ),
                    frequency: accuracy_value.clamp(0.0, 1.0),
                    impact: PatternImpact::Concerning,
                    suggestion: format!(
                        "Adjust portion sizes to bring your average back toward {target:.0} kcal"
                    ),
                    confidence: 0.8,
                });
            }
        }

        findings
    }

    fn analyze_macro_distribution(
        &self,
        daily: &[DailyTotals],
        goals: &NutritionGoals,
    ) -> Vec<EatingPattern> {
        if daily.is_empty() {
            return Vec::new();
        }

        let protein_avg = statistics::mean(&daily.iter().map(|d| d.protein_g).collect::<Vec<_>>());
        let carbs_avg = statistics::mean(&daily.iter().map(|d| d.carbs_g).collect::<Vec<_>>());
        let fat_avg = statistics::mean(&daily.iter().map(|d| d.fat_g).collect::<Vec<_>>());

        let Some(actual_protein_share) = protein_calorie_share(protein_avg, carbs_avg, fat_avg)
        else {
            return Vec::new();
        };
        let Some(target_protein_share) =
            protein_calorie_share(goals.protein_g, goals.carbs_g, goals.fat_g)
        else {
            return Vec::new();
        };

        let deviation = actual_protein_share - target_protein_share;
        let mut findings = Vec::new();

        if deviation.abs() < self.thresholds.protein_share_tolerance {
            findings.push(EatingPattern {
                pattern_type: EatingPatternType::MacroDistribution,
                description: format!(
                    "Protein supplies {:.0}% of your calories, right on its target share",
                    actual_protein_share * 100.0
                ),
                frequency: actual_protein_share.clamp(0.0, 1.0),
                impact: PatternImpact::Positive,
                suggestion: "Your macro split matches your plan, no changes needed".into(),
                confidence: 0.75,
            });
        } else if deviation < -self.thresholds.protein_share_tolerance {
            findings.push(EatingPattern {
                pattern_type: EatingPatternType::MacroDistribution,
                description: format!(
                    "Protein supplies {:.0}% of your calories versus a {:.0}% target",
                    actual_protein_share * 100.0,
                    target_protein_share * 100.0
                ),
                frequency: actual_protein_share.clamp(0.0, 1.0),
                impact: PatternImpact::Concerning,
                suggestion: "Add a palm-sized portion of lean protein to lunch and dinner".into(),
                confidence: 0.75,
            });
        }

        findings
    }

    fn analyze_meal_frequency(&self, daily: &[DailyTotals]) -> Vec<EatingPattern> {
        if daily.is_empty() {
            return Vec::new();
        }

        let counts: Vec<f64> = daily.iter().map(|d| d.meal_count as f64).collect();
        let average = statistics::mean(&counts);
        let consistency = statistics::consistency_score(&counts);

        let mut findings = Vec::new();

        if average < self.thresholds.min_meals_per_day {
            findings.push(EatingPattern {
                pattern_type: EatingPatternType::MealFrequency,
                description: format!(
                    "You average {average:.1} meals per day, which suggests skipping meals"
                ),
                frequency: (average / self.thresholds.min_meals_per_day).clamp(0.0, 1.0),
                impact: PatternImpact::Concerning,
                suggestion:
                    "Plan three meals a day, even small ones, to avoid energy dips and evening overeating"
                        .into(),
                confidence: 0.7,
            });
        } else if average > self.thresholds.max_meals_per_day {
            findings.push(EatingPattern {
                pattern_type: EatingPatternType::MealFrequency,
                description: format!("You average {average:.1} eating occasions per day"),
                frequency: 1.0,
                impact: PatternImpact::Neutral,
                suggestion: "Frequent small meals are fine as long as they fit your calorie budget"
                    .into(),
                confidence: 0.7,
            });
        }

        if consistency > self.thresholds.frequency_consistency_positive {
            findings.push(EatingPattern {
                pattern_type: EatingPatternType::MealFrequency,
                description: format!("You eat a steady {average:.1} meals per day"),
                frequency: consistency,
                impact: PatternImpact::Positive,
                suggestion: "A predictable meal rhythm makes hitting targets easier, keep it".into(),
                confidence: 0.7,
            });
        }

        findings
    }

    fn analyze_weekend_variance(&self, meals: &[LoggedMeal]) -> Vec<EatingPattern> {
        let Some(variance) = aggregator::weekend_variance(meals) else {
            return Vec::new();
        };

        let variance_percent = variance * 100.0;
        let finding = if variance > self.thresholds.weekend_variance_flag {
            let concerning = variance > self.thresholds.weekend_variance_concerning;
            EatingPattern {
                pattern_type: EatingPatternType::WeekendVariance,
                description: format!(
                    "Weekend calories differ from weekdays by {variance_percent:.0}%"
                ),
                frequency: variance.clamp(0.0, 1.0),
                impact: if concerning {
                    PatternImpact::Concerning
                } else {
                    PatternImpact::Neutral
                },
                suggestion: if concerning {
                    "Plan weekend meals ahead and keep one anchor meal the same as weekdays".into()
                } else {
                    "Keep an eye on weekend portions so the gap does not grow".into()
                },
                confidence: 0.65,
            }
        } else {
            EatingPattern {
                pattern_type: EatingPatternType::WeekendVariance,
                description: "Your intake stays consistent across weekdays and weekends".into(),
                frequency: 1.0 - variance.clamp(0.0, 1.0),
                impact: PatternImpact::Positive,
                suggestion: "Your weekly rhythm is working, keep it up".into(),
                confidence: 0.65,
            }
        };

        vec![finding]
    }
}

/// Protein's share of total calories given average daily grams
///
/// Returns `None` when the implied calorie total is zero.
fn protein_calorie_share(protein_g: f64, carbs_g: f64, fat_g: f64) -> Option<f64> {
    let protein_kcal = protein_g * energy::PROTEIN_KCAL_PER_G;
    let total_kcal = protein_kcal
        + carbs_g * energy::CARBS_KCAL_PER_G
        + fat_g * energy::FAT_KCAL_PER_G;
    (total_kcal > 0.0).then(|| protein_kcal / total_kcal)
}

const fn optimal_window(meal_type: MealType) -> (u32, u32) {
    match meal_type {
        MealType::Breakfast => meal_windows::BREAKFAST,
        MealType::Lunch => meal_windows::LUNCH,
        MealType::Dinner => meal_windows::DINNER,
        MealType::Snack => meal_windows::SNACK,
    }
}
