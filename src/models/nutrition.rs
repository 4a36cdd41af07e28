// ABOUTME: Nutrition tracking models for food intake logging
// ABOUTME: Food catalog entries, saved meals, meal slots, and immutable nutrition entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time-of-day category for grouping nutrition entries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Afternoon snack
    Snack,
    /// Dinner
    Dinner,
    /// Any other light meal
    Collation,
}

impl MealSlot {
    /// All slots in display order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Snack,
        Self::Dinner,
        Self::Collation,
    ];

    /// Parse from string, degrading unknown values to `Collation`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "snack" => Self::Snack,
            "dinner" => Self::Dinner,
            _ => Self::Collation,
        }
    }
}

/// Food catalog entry with per-100g nutritional values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    /// Unique identifier
    pub id: Uuid,
    /// Food name
    pub name: String,
    /// Calories per 100g
    pub kcal_per_100g: f64,
    /// Protein per 100g (grams)
    pub protein_per_100g: f64,
    /// Carbohydrates per 100g (grams)
    pub carb_per_100g: f64,
    /// Fat per 100g (grams)
    pub fat_per_100g: f64,
    /// Whether this food was created by the user (vs. the seed catalog)
    pub is_custom: bool,
}

impl Food {
    /// Create a user-defined food with a fresh identifier
    #[must_use]
    pub fn custom(
        name: impl Into<String>,
        kcal_per_100g: f64,
        protein_per_100g: f64,
        carb_per_100g: f64,
        fat_per_100g: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kcal_per_100g,
            protein_per_100g,
            carb_per_100g,
            fat_per_100g,
            is_custom: true,
        }
    }
}

/// One ingredient line of a saved meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SavedMealItem {
    /// Referenced food
    pub food_id: Uuid,
    /// Quantity in grams
    pub quantity_g: f64,
}

/// A reusable combination of foods logged together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedMeal {
    /// Unique identifier
    pub id: Uuid,
    /// Meal name
    pub name: String,
    /// Ingredient lines
    pub items: Vec<SavedMealItem>,
}

impl SavedMeal {
    /// Create a saved meal with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<SavedMealItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            items,
        }
    }
}

/// An immutable record of a food logged on a given day and meal slot
///
/// Macro amounts are computed once at creation time from the referenced
/// food's per-100g values and never recomputed; later edits to the food
/// catalog do not rewrite history. There is no edit path — entries are
/// created, read, and (by caller-side bulk operations) discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Calendar date (day granularity, no time component)
    pub date: NaiveDate,
    /// Meal slot this entry belongs to
    pub meal_slot: MealSlot,
    /// Referenced food catalog entry
    pub food_id: Uuid,
    /// Quantity in grams (strictly positive)
    pub quantity_g: f64,
    /// Calories for this quantity
    pub kcal: f64,
    /// Protein for this quantity (grams)
    pub protein_g: f64,
    /// Carbohydrates for this quantity (grams)
    pub carb_g: f64,
    /// Fat for this quantity (grams)
    pub fat_g: f64,
}

impl NutritionEntry {
    /// Create an entry for `quantity_g` of `food` on `date` in `slot`
    ///
    /// Amounts are scaled as `quantity_g / 100 x per-100g`.
    #[must_use]
    pub fn from_food(food: &Food, date: NaiveDate, slot: MealSlot, quantity_g: f64) -> Self {
        let mult = quantity_g / 100.0;
        Self {
            id: Uuid::new_v4(),
            date,
            meal_slot: slot,
            food_id: food.id,
            quantity_g,
            kcal: food.kcal_per_100g * mult,
            protein_g: food.protein_per_100g * mult,
            carb_g: food.carb_per_100g * mult,
            fat_g: food.fat_per_100g * mult,
        }
    }
}
