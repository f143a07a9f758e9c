// ABOUTME: Descriptive statistics for nutrition series analysis
// ABOUTME: Mean, dispersion, coefficient of variation, and consistency scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

#![allow(clippy::cast_precision_loss)] // Safe: series lengths are small day counts

//! Descriptive statistics over numeric series.
//!
//! Every function short-circuits the degenerate cases (empty series, single
//! element, zero mean) to a safe default instead of producing `NaN` or
//! `Infinity`. Consistency is defined as `1 - CV`, floored at 0: tighter
//! clustering of values pushes the score toward 1.

/// Arithmetic mean; 0 for an empty series
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for fewer than 2 values
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|value| {
            let diff = value - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Coefficient of variation (standard deviation over mean)
///
/// Returns 0 for fewer than 2 values or a zero mean.
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    if avg == 0.0 {
        return 0.0;
    }
    std_dev(values) / avg
}

/// Consistency score in [0, 1]: `max(0, 1 - CV)`
#[must_use]
pub fn consistency_score(values: &[f64]) -> f64 {
    (1.0 - coefficient_of_variation(values)).max(0.0)
}

/// Median value; 0 for an empty series
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let len = sorted.len();
    if len % 2 == 0 {
        f64::midpoint(sorted[len / 2 - 1], sorted[len / 2])
    } else {
        sorted[len / 2]
    }
}

/// Week-over-week percentage change: `(recent - previous) / previous * 100`
///
/// Returns `None` unless the previous value is positive, avoiding division
/// by zero and sign-flipped percentages from negative baselines.
#[must_use]
pub fn relative_change_percent(recent: f64, previous: f64) -> Option<f64> {
    (previous > 0.0).then(|| (recent - previous) / previous * 100.0)
}
