// ABOUTME: Nutrition configuration for energy target and macro split calculations
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustments, and macro rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Nutrition Calculation Configuration
//!
//! Value tables for the energy model with researched defaults.
//!
//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
//!   Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use serde::{Deserialize, Serialize};

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments per training goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Macro split rules (g/kg bounds and energy densities)
    pub macro_rules: MacroRulesConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    ///
    /// Also applied to [`crate::models::Sex::Other`]; the formula has no
    /// published third constant.
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub high: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub very_high: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            high: 1.725,
            very_high: 1.9,
        }
    }
}

/// Calorie adjustment fractions per training goal
///
/// The daily calorie target is `TDEE * (1 + adjustment)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Moderate cut: -15%
    pub cut: f64,
    /// Aggressive cut: -25%
    pub cut_aggressive: f64,
    /// Maintenance: 0%
    pub maintain: f64,
    /// Lean bulk: +10%
    pub bulk: f64,
    /// Aggressive bulk: +20%
    pub bulk_aggressive: f64,
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            cut: -0.15,
            cut_aggressive: -0.25,
            maintain: 0.0,
            bulk: 0.10,
            bulk_aggressive: 0.20,
        }
    }
}

/// Macro split rules: per-kilogram gram bounds and energy densities
///
/// References:
/// - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
/// - Energy densities: Atwater general factors (4/4/9 kcal per gram)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRulesConfig {
    /// Nominal protein (g/kg bodyweight): 1.8
    pub protein_nominal_g_per_kg: f64,
    /// Minimum protein (g/kg): 1.6
    pub protein_min_g_per_kg: f64,
    /// Maximum protein (g/kg): 2.2
    pub protein_max_g_per_kg: f64,
    /// Nominal fat (g/kg): 0.8
    pub fat_nominal_g_per_kg: f64,
    /// Minimum fat (g/kg): 0.6
    pub fat_min_g_per_kg: f64,
    /// Maximum fat (g/kg): 1.2
    pub fat_max_g_per_kg: f64,
    /// Energy density of protein (kcal/g): 4
    pub kcal_per_g_protein: f64,
    /// Energy density of carbohydrate (kcal/g): 4
    pub kcal_per_g_carb: f64,
    /// Energy density of fat (kcal/g): 9
    pub kcal_per_g_fat: f64,
}

impl Default for MacroRulesConfig {
    fn default() -> Self {
        Self {
            protein_nominal_g_per_kg: 1.8,
            protein_min_g_per_kg: 1.6,
            protein_max_g_per_kg: 2.2,
            fat_nominal_g_per_kg: 0.8,
            fat_min_g_per_kg: 0.6,
            fat_max_g_per_kg: 1.2,
            kcal_per_g_protein: 4.0,
            kcal_per_g_carb: 4.0,
            kcal_per_g_fat: 9.0,
        }
    }
}
