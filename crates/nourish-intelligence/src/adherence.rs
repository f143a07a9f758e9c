// ABOUTME: Goal adherence scoring over daily progress snapshots
// ABOUTME: Strict multi-criterion day counting, no partial credit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

#![allow(clippy::cast_precision_loss)] // Safe: day counts are small

//! Adherence scoring.
//!
//! A day counts only when it satisfies every criterion at once: calorie
//! ratio inside the band, protein ratio at minimum, and calorie deviation
//! under the strict cap. Ratios come from consumed/goal with a `goal > 0`
//! guard; an unconfigured goal fails the day's criteria rather than
//! dividing by zero.

use nourish_core::models::DailyProgress;

use crate::analysis_config::AdherenceCriteria;

/// Fraction of days meeting the full adherence rule, in [0, 1]
///
/// Returns exactly 0.0 for an empty history.
#[must_use]
pub fn adherence_score(days: &[DailyProgress]) -> f64 {
    adherence_score_with(days, &AdherenceCriteria::default())
}

/// Adherence score under custom criteria
#[must_use]
pub fn adherence_score_with(days: &[DailyProgress], criteria: &AdherenceCriteria) -> f64 {
    if days.is_empty() {
        return 0.0;
    }

    let met = days.iter().filter(|day| day_adheres(day, criteria)).count();
    met as f64 / days.len() as f64
}

fn day_adheres(day: &DailyProgress, criteria: &AdherenceCriteria) -> bool {
    let Some(calorie_ratio) = day.calories.ratio() else {
        return false;
    };
    let Some(protein_ratio) = day.macros.protein.ratio() else {
        return false;
    };

    calorie_ratio >= criteria.calorie_ratio_min
        && calorie_ratio <= criteria.calorie_ratio_max
        && protein_ratio >= criteria.protein_ratio_min
        && (calorie_ratio - 1.0).abs() < criteria.calorie_deviation_max
}
