// ABOUTME: User profile model with sex, goal, and activity level enums
// ABOUTME: Lossy parsing degrades unknown values to named default variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

use serde::{Deserialize, Serialize};

/// Sex for BMR calculations
///
/// The Mifflin-St Jeor formula publishes two constants (male/female);
/// [`Sex::Other`] shares the female constant. See
/// [`crate::intelligence::energy::compute_bmr`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 constant in Mifflin-St Jeor)
    Male,
    /// Female (-161 constant)
    Female,
    /// Other or undisclosed (-161 constant, same as Female)
    Other,
}

impl Sex {
    /// Parse from string, degrading unknown values to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (factor 1.2)
    Sedentary,
    /// 1-3 sessions/week (factor 1.375)
    Light,
    /// 3-5 sessions/week (factor 1.55)
    Moderate,
    /// 6-7 sessions/week (factor 1.725)
    High,
    /// Hard training twice a day (factor 1.9)
    VeryHigh,
}

impl ActivityLevel {
    /// Parse from string, degrading unknown values to `Sedentary`
    ///
    /// `Sedentary` is the engine-wide fallback: a profile with a missing or
    /// unrecognized activity level computes sedentary-equivalent targets
    /// rather than failing.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            "very_high" => Self::VeryHigh,
            _ => Self::Sedentary,
        }
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        Self::Sedentary
    }
}

/// Training goal for calorie target adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Moderate deficit (-15%)
    Cut,
    /// Aggressive deficit (-25%)
    CutAggressive,
    /// Caloric balance (0%)
    Maintain,
    /// Lean surplus (+10%)
    Bulk,
    /// Aggressive surplus (+20%)
    BulkAggressive,
}

impl Goal {
    /// Parse from string, degrading unknown values to `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cut" => Self::Cut,
            "cut_aggressive" => Self::CutAggressive,
            "bulk" => Self::Bulk,
            "bulk_aggressive" => Self::BulkAggressive,
            _ => Self::Maintain,
        }
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::Maintain
    }
}

/// Optional per-profile macro target overrides
///
/// An override replaces the computed default *without* re-applying the g/kg
/// clamp — the user takes responsibility for values outside nominal bounds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroOverrides {
    /// Fixed daily protein target (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Fixed daily fat target (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

/// Single-user profile, owned by the caller (one per installation)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Sex for BMR calculation
    pub sex: Sex,
    /// Age in whole years (strictly positive)
    pub age_years: u32,
    /// Height in centimeters (strictly positive)
    pub height_cm: f64,
    /// Current body weight in kilograms (strictly positive)
    pub current_weight_kg: f64,
    /// Training goal
    pub goal: Goal,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Optional macro overrides
    #[serde(default)]
    pub macro_overrides: MacroOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_lossy_parsing() {
        assert_eq!(Sex::from_str_lossy("Male"), Sex::Male);
        assert_eq!(Sex::from_str_lossy("FEMALE"), Sex::Female);
        assert_eq!(Sex::from_str_lossy("nonbinary"), Sex::Other);
        assert_eq!(Sex::from_str_lossy(""), Sex::Other);
    }

    #[test]
    fn test_activity_level_falls_back_to_sedentary() {
        assert_eq!(ActivityLevel::from_str_lossy("moderate"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_str_lossy("VERY_HIGH"), ActivityLevel::VeryHigh);
        assert_eq!(ActivityLevel::from_str_lossy("couch"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::default(), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_goal_falls_back_to_maintain() {
        assert_eq!(Goal::from_str_lossy("cut"), Goal::Cut);
        assert_eq!(Goal::from_str_lossy("recomp"), Goal::Maintain);
        assert_eq!(Goal::default(), Goal::Maintain);
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = UserProfile {
            sex: Sex::Female,
            age_years: 28,
            height_cm: 165.0,
            current_weight_kg: 60.0,
            goal: Goal::Cut,
            activity_level: ActivityLevel::Light,
            macro_overrides: MacroOverrides {
                protein_g: Some(130.0),
                fat_g: None,
            },
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_profile_deserializes_without_overrides() {
        let json = r#"{
            "sex": "male",
            "age_years": 40,
            "height_cm": 175.0,
            "current_weight_kg": 82.5,
            "goal": "bulk",
            "activity_level": "high"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.macro_overrides, MacroOverrides::default());
    }
}
