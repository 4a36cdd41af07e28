// ABOUTME: Domain data models for profile, nutrition, body metrics, and workouts
// ABOUTME: Split by domain with shared serde conventions and lossy enum parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Domain data models
//!
//! Records are plain serde-derived structs. Identifier fields are UUIDs
//! generated at creation time; the crate never derives identity from clocks
//! or random string concatenation. Enum-like fields are closed enums with a
//! `from_str_lossy` parser whose fallback branch is the documented default,
//! so a typo in persisted data degrades visibly instead of failing a lookup.

/// Body metric records (weight history)
pub mod body;

/// Foods, saved meals, meal slots, and immutable nutrition entries
pub mod nutrition;

/// User profile and its enum-like fields
pub mod profile;

/// Exercise catalog, workout templates, and training sessions
pub mod workout;

pub use body::BodyWeightEntry;
pub use nutrition::{Food, MealSlot, NutritionEntry, SavedMeal, SavedMealItem};
pub use profile::{ActivityLevel, Goal, MacroOverrides, Sex, UserProfile};
pub use workout::{
    ExerciseType, SessionStatus, TemplateItem, WorkoutLog, WorkoutSession, WorkoutTemplate,
};
