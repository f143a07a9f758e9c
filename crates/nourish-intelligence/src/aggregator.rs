// ABOUTME: Meal log aggregation into per-day and per-type numeric series
// ABOUTME: Pure grouping and summation, no state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

#![allow(clippy::cast_precision_loss)] // Safe: meal and day counts are small

//! Reduces a flat meal log into the series the analyzers consume: per-day
//! totals, per-meal-type groups, and weekday/weekend splits. All functions
//! are pure; a `BTreeMap` keyed by date keeps iteration order deterministic
//! so downstream output is referentially transparent.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use nourish_core::models::{LoggedMeal, MealType};
use serde::{Deserialize, Serialize};

/// Summed intake for a single calendar day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    /// Total calories for the day
    pub calories: f64,
    /// Total protein in grams
    pub protein_g: f64,
    /// Total carbohydrates in grams
    pub carbs_g: f64,
    /// Total fat in grams
    pub fat_g: f64,
    /// Number of meals logged
    pub meal_count: usize,
}

/// Meals partitioned by weekday vs weekend
#[derive(Debug, Default)]
pub struct WeekdaySplit<'a> {
    /// Meals logged Monday through Friday
    pub weekday: Vec<&'a LoggedMeal>,
    /// Meals logged Saturday or Sunday
    pub weekend: Vec<&'a LoggedMeal>,
}

/// Sum meals into per-day totals, keyed and ordered by date
#[must_use]
pub fn aggregate_daily(meals: &[LoggedMeal]) -> BTreeMap<NaiveDate, DailyTotals> {
    let mut days: BTreeMap<NaiveDate, DailyTotals> = BTreeMap::new();
    for meal in meals {
        let totals = days.entry(meal.date).or_default();
        totals.calories += meal.calories;
        totals.protein_g += meal.protein_g;
        totals.carbs_g += meal.carbs_g;
        totals.fat_g += meal.fat_g;
        totals.meal_count += 1;
    }
    days
}

/// Group meals by their meal slot
#[must_use]
pub fn group_by_meal_type(meals: &[LoggedMeal]) -> HashMap<MealType, Vec<&LoggedMeal>> {
    let mut groups: HashMap<MealType, Vec<&LoggedMeal>> = HashMap::new();
    for meal in meals {
        groups.entry(meal.meal_type).or_default().push(meal);
    }
    groups
}

/// Partition meals into weekday and weekend sets
#[must_use]
pub fn split_weekday_weekend(meals: &[LoggedMeal]) -> WeekdaySplit<'_> {
    let mut split = WeekdaySplit::default();
    for meal in meals {
        match meal.date.weekday() {
            Weekday::Sat | Weekday::Sun => split.weekend.push(meal),
            _ => split.weekday.push(meal),
        }
    }
    split
}

/// Number of distinct calendar days with at least one logged meal
#[must_use]
pub fn observed_days(meals: &[LoggedMeal]) -> usize {
    aggregate_daily(meals).len()
}

/// Per-day calorie totals in date order
#[must_use]
pub fn daily_calorie_series(meals: &[LoggedMeal]) -> Vec<f64> {
    aggregate_daily(meals)
        .values()
        .map(|totals| totals.calories)
        .collect()
}

/// Mean daily calories across observed days; 0 with no meals
#[must_use]
pub fn average_daily_calories(meals: &[LoggedMeal]) -> f64 {
    crate::statistics::mean(&daily_calorie_series(meals))
}

/// Relative weekend-vs-weekday calorie difference
///
/// `|weekend avg - weekday avg| / weekday avg`. Returns `None` when either
/// partition is empty or the weekday average is zero.
#[must_use]
pub fn weekend_variance(meals: &[LoggedMeal]) -> Option<f64> {
    let split = split_weekday_weekend(meals);
    if split.weekday.is_empty() || split.weekend.is_empty() {
        return None;
    }

    let weekday_avg = average_daily_calories_of(&split.weekday);
    let weekend_avg = average_daily_calories_of(&split.weekend);
    (weekday_avg > 0.0).then(|| (weekend_avg - weekday_avg).abs() / weekday_avg)
}

fn average_daily_calories_of(meals: &[&LoggedMeal]) -> f64 {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for meal in meals {
        *days.entry(meal.date).or_insert(0.0) += meal.calories;
    }
    let series: Vec<f64> = days.into_values().collect();
    crate::statistics::mean(&series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(day: u32, meal_type: MealType, calories: f64) -> LoggedMeal {
        LoggedMeal {
            // March 2025: the 1st is a Saturday
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            meal_type,
            calories,
            protein_g: 25.0,
            carbs_g: 40.0,
            fat_g: 12.0,
        }
    }

    #[test]
    fn daily_totals_sum_across_meals() {
        let meals = vec![
            meal(3, MealType::Breakfast, 400.0),
            meal(3, MealType::Lunch, 700.0),
            meal(4, MealType::Dinner, 800.0),
        ];

        let days = aggregate_daily(&meals);
        assert_eq!(days.len(), 2);

        let monday = &days[&NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()];
        assert!((monday.calories - 1100.0).abs() < f64::EPSILON);
        assert!((monday.protein_g - 50.0).abs() < f64::EPSILON);
        assert_eq!(monday.meal_count, 2);
    }

    #[test]
    fn daily_aggregation_is_date_ordered() {
        let meals = vec![
            meal(10, MealType::Lunch, 700.0),
            meal(3, MealType::Lunch, 650.0),
            meal(7, MealType::Lunch, 720.0),
        ];

        let dates: Vec<u32> = aggregate_daily(&meals).keys().map(Datelike::day).collect();
        assert_eq!(dates, vec![3, 7, 10]);
    }

    #[test]
    fn meal_type_groups_preserve_entries() {
        let meals = vec![
            meal(3, MealType::Breakfast, 400.0),
            meal(4, MealType::Breakfast, 420.0),
            meal(4, MealType::Snack, 150.0),
        ];

        let groups = group_by_meal_type(&meals);
        assert_eq!(groups[&MealType::Breakfast].len(), 2);
        assert_eq!(groups[&MealType::Snack].len(), 1);
        assert!(!groups.contains_key(&MealType::Dinner));
    }

    #[test]
    fn weekend_split_uses_saturday_and_sunday() {
        let meals = vec![
            meal(1, MealType::Lunch, 900.0), // Saturday
            meal(2, MealType::Lunch, 950.0), // Sunday
            meal(3, MealType::Lunch, 600.0), // Monday
        ];

        let split = split_weekday_weekend(&meals);
        assert_eq!(split.weekend.len(), 2);
        assert_eq!(split.weekday.len(), 1);
    }

    #[test]
    fn weekend_variance_compares_daily_averages() {
        let meals = vec![
            meal(1, MealType::Lunch, 2600.0), // Saturday
            meal(3, MealType::Lunch, 2000.0), // Monday
            meal(4, MealType::Lunch, 2000.0), // Tuesday
        ];

        let variance = weekend_variance(&meals).unwrap();
        assert!((variance - 0.3).abs() < 1e-9);
    }

    #[test]
    fn average_daily_calories_spans_observed_days() {
        let meals = vec![
            meal(3, MealType::Breakfast, 500.0),
            meal(3, MealType::Dinner, 1500.0),
            meal(4, MealType::Dinner, 1000.0),
        ];
        assert!((average_daily_calories(&meals) - 1500.0).abs() < f64::EPSILON);
        assert!((average_daily_calories(&[]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weekend_variance_requires_both_partitions() {
        let weekdays_only = vec![meal(3, MealType::Lunch, 2000.0)];
        assert!(weekend_variance(&weekdays_only).is_none());
    }
}
