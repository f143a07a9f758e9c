// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Nutrition constants based on dietary science references
//!
//! This module contains established constants used throughout the analysis
//! engine. Values are based on published dietary guidelines and nutrition
//! research.

/// Energy density of macronutrients
///
/// References:
/// - Atwater, W.O. & Bryant, A.P. (1900). The availability and fuel value of food materials
/// - FAO (2003). Food energy - methods of analysis and conversion factors
///   <https://www.fao.org/3/y5022e/y5022e00.htm>
pub mod energy {
    /// Calories per gram of protein (Atwater general factor)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

    /// Calories per gram of carbohydrate (Atwater general factor)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;

    /// Calories per gram of fat (Atwater general factor)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Optimal meal timing windows (hour of day, inclusive)
///
/// Used in coaching copy for meal-timing findings. The engine receives no
/// per-meal timestamps, so these windows drive suggestions rather than
/// measured classification.
///
/// References:
/// - St-Onge, M.P., et al. (2017). Meal timing and frequency: implications for
///   cardiovascular disease prevention. *Circulation*, 135(9), e96-e121.
///   <https://doi.org/10.1161/CIR.0000000000000476>
pub mod meal_windows {
    /// Recommended breakfast window (6:00-10:00)
    pub const BREAKFAST: (u32, u32) = (6, 10);

    /// Recommended lunch window (11:00-14:00)
    pub const LUNCH: (u32, u32) = (11, 14);

    /// Recommended dinner window (17:00-20:00)
    pub const DINNER: (u32, u32) = (17, 20);

    /// Recommended snack window (14:00-16:00)
    pub const SNACK: (u32, u32) = (14, 16);
}

/// Expected share of daily intake consumed by each part of the day
///
/// A simple linear pacing model used by predictive insights: by midday about
/// half the day's calories should be in, by evening most of them.
pub mod pacing {
    /// Expected intake fraction by morning
    pub const MORNING_FRACTION: f64 = 0.25;

    /// Expected intake fraction by midday
    pub const MIDDAY_FRACTION: f64 = 0.5;

    /// Expected intake fraction by afternoon
    pub const AFTERNOON_FRACTION: f64 = 0.65;

    /// Expected intake fraction by evening
    pub const EVENING_FRACTION: f64 = 0.85;

    /// Expected intake fraction by night (full day)
    pub const NIGHT_FRACTION: f64 = 1.0;
}

/// Meal frequency guidance
///
/// References:
/// - Leidy, H.J. & Campbell, W.W. (2011). The effect of eating frequency on
///   appetite control and food intake. *Journal of Nutrition*, 141(1), 154-157.
///   <https://doi.org/10.3945/jn.109.114389>
pub mod frequency {
    /// Below this average meals/day the engine flags meal skipping
    pub const MIN_MEALS_PER_DAY: f64 = 2.5;

    /// Above this average meals/day the engine notes frequent eating
    pub const MAX_MEALS_PER_DAY: f64 = 5.0;
}
