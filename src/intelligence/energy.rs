// ABOUTME: Energy model - BMR, TDEE, goal-adjusted calorie targets, and macro splits
// ABOUTME: Mifflin-St Jeor based, configured by value tables, total over its domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Energy Model
//!
//! Converts a user profile into a daily calorie target and macro split.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
//!   (activity factor table)
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   DOI: 10.1080/02640414.2011.619204

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroRulesConfig, NutritionConfig,
};
use crate::models::{ActivityLevel, Goal, MacroOverrides, Sex, UserProfile};
use serde::{Deserialize, Serialize};

/// Daily macro targets in grams, each rounded independently
///
/// Because protein, fat, and carbs are rounded separately, the energy sum
/// of the rounded parts can drift a few kcal from the calorie target. That
/// drift is accepted; displays show the rounded grams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTarget {
    /// Daily protein target (grams)
    pub protein_g: u32,
    /// Daily fat target (grams)
    pub fat_g: u32,
    /// Daily carbohydrate target (grams)
    pub carb_g: u32,
}

/// Complete daily targets for a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily calorie target (kcal/day, rounded)
    pub calories: i64,
    /// Macro split for the calorie target
    pub macros: MacroTarget,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = 10 x `weight_kg` + 6.25 x `height_cm` - 5 x age + constant
/// - Male: +5
/// - Female and Other: -161
///
/// The formula publishes only two constants, so `Other` shares the female
/// branch. Keep this two-branch shape: inventing a third constant would be
/// a behavior change, not a refactor.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn compute_bmr(sex: Sex, age_years: u32, height_cm: f64, weight_kg: f64, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female | Sex::Other => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor. Factors default to the `McArdle`
/// et al. (2010) table: 1.2 / 1.375 / 1.55 / 1.725 / 1.9.
///
/// A profile with no meaningful activity selection parses to
/// [`ActivityLevel::Sedentary`] (see `from_str_lossy`), so missing data
/// yields sedentary-equivalent numbers rather than an error.
#[must_use]
pub fn compute_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    let factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::High => config.high,
        ActivityLevel::VeryHigh => config.very_high,
    };
    bmr * factor
}

/// Adjust TDEE for the training goal, rounded to whole kcal
///
/// Formula: `round(tdee * (1 + adjustment))` with adjustments defaulting to
/// -15% / -25% / 0% / +10% / +20%. Unknown goal strings parse to
/// [`Goal::Maintain`], i.e. a 0% adjustment.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // kcal/day values are far below i64 range
pub fn adjust_for_goal(tdee: f64, goal: Goal, config: &GoalAdjustmentsConfig) -> i64 {
    let adjustment = match goal {
        Goal::Cut => config.cut,
        Goal::CutAggressive => config.cut_aggressive,
        Goal::Maintain => config.maintain,
        Goal::Bulk => config.bulk,
        Goal::BulkAggressive => config.bulk_aggressive,
    };
    (tdee * (1.0 + adjustment)).round() as i64
}

/// Calculate the daily macro split for a calorie target
///
/// - Protein default: `1.8 g/kg`, clamped to `[1.6, 2.2] g/kg`
/// - Fat default: `0.8 g/kg`, clamped to `[0.6, 1.2] g/kg`
/// - Carbs: whatever calories remain at 4 kcal/g, floored at zero — if
///   protein and fat already exceed the budget, the carb target is 0, never
///   negative
///
/// Overrides replace the computed defaults *without* the clamp; an override
/// outside nominal bounds is taken at face value.
#[must_use]
pub fn compute_macros(
    calories: i64,
    weight_kg: f64,
    overrides: &MacroOverrides,
    config: &MacroRulesConfig,
) -> MacroTarget {
    let protein_target = overrides.protein_g.unwrap_or_else(|| {
        (config.protein_nominal_g_per_kg * weight_kg).clamp(
            config.protein_min_g_per_kg * weight_kg,
            config.protein_max_g_per_kg * weight_kg,
        )
    });
    let fat_target = overrides.fat_g.unwrap_or_else(|| {
        (config.fat_nominal_g_per_kg * weight_kg).clamp(
            config.fat_min_g_per_kg * weight_kg,
            config.fat_max_g_per_kg * weight_kg,
        )
    });

    // Carbs absorb the remaining budget, computed from the unrounded
    // protein/fat targets
    let protein_kcal = protein_target * config.kcal_per_g_protein;
    let fat_kcal = fat_target * config.kcal_per_g_fat;
    #[allow(clippy::cast_precision_loss)] // kcal/day values are exactly representable
    let carb_kcal = (calories as f64 - protein_kcal - fat_kcal).max(0.0);
    let carb_target = carb_kcal / config.kcal_per_g_carb;

    MacroTarget {
        protein_g: round_grams(protein_target),
        fat_g: round_grams(fat_target),
        carb_g: round_grams(carb_target),
    }
}

/// Calculate complete daily targets for a profile
///
/// Chains [`compute_bmr`], [`compute_tdee`], [`adjust_for_goal`], and
/// [`compute_macros`].
#[must_use]
pub fn daily_targets(profile: &UserProfile, config: &NutritionConfig) -> DailyTargets {
    let bmr = compute_bmr(
        profile.sex,
        profile.age_years,
        profile.height_cm,
        profile.current_weight_kg,
        &config.bmr,
    );
    let tdee = compute_tdee(bmr, profile.activity_level, &config.activity_factors);
    let calories = adjust_for_goal(tdee, profile.goal, &config.goal_adjustments);
    let macros = compute_macros(
        calories,
        profile.current_weight_kg,
        &profile.macro_overrides,
        &config.macro_rules,
    );

    DailyTargets {
        bmr,
        tdee,
        calories,
        macros,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_grams(grams: f64) -> u32 {
    if grams <= 0.0 {
        0
    } else {
        grams.round() as u32
    }
}
