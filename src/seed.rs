// ABOUTME: Seed catalogs for first-run application state
// ABOUTME: Default foods, exercise types, and starter workout templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Seed catalogs
//!
//! A fresh installation starts from a small food catalog, a basic barbell
//! exercise catalog, and three starter push/pull/legs-style templates. The
//! catalogs are generated together so template items reference the exercise
//! ids created in the same call; after the first save they persist with the
//! rest of the snapshot and the ids stay stable.

use crate::models::{ExerciseType, Food, TemplateItem, WorkoutTemplate};
use uuid::Uuid;

/// The catalogs a fresh state starts from
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    /// Starter food catalog (per-100g values)
    pub foods: Vec<Food>,
    /// Starter exercise catalog
    pub exercises: Vec<ExerciseType>,
    /// Starter workout templates referencing the seeded exercises
    pub templates: Vec<WorkoutTemplate>,
}

impl SeedCatalog {
    /// Build the default seed catalog with fresh identifiers
    #[must_use]
    pub fn new() -> Self {
        let foods = vec![
            seed_food("White rice", 130.0, 2.7, 28.0, 0.3),
            seed_food("Cooked chicken", 165.0, 31.0, 0.0, 3.6),
            seed_food("Almonds", 579.0, 21.0, 22.0, 50.0),
            seed_food("Egg", 155.0, 13.0, 1.1, 11.0),
            seed_food("Banana", 89.0, 1.1, 23.0, 0.3),
            seed_food("Oats", 389.0, 16.9, 66.0, 6.9),
        ];

        let bench = ExerciseType::new("Bench press", "Chest");
        let squat = ExerciseType::new("Squat", "Legs");
        let deadlift = ExerciseType::new("Deadlift", "Back");
        let row = ExerciseType::new("Barbell row", "Back");
        let pullup = ExerciseType::new("Pull-up", "Back");
        let ohp = ExerciseType::new("Overhead press", "Shoulders");
        let lunge = ExerciseType::new("Lunge", "Legs");
        let curl = ExerciseType::new("Biceps curl", "Biceps");
        let extension = ExerciseType::new("Triceps extension", "Triceps");

        let templates = vec![
            WorkoutTemplate::new(
                "Chest/Triceps",
                vec![item(bench.id, 4, 8, 120), item(extension.id, 3, 12, 90)],
            ),
            WorkoutTemplate::new(
                "Back/Biceps",
                vec![
                    item(pullup.id, 4, 6, 120),
                    item(row.id, 4, 10, 90),
                    item(curl.id, 3, 12, 60),
                ],
            ),
            WorkoutTemplate::new(
                "Legs/Shoulders",
                vec![
                    item(squat.id, 5, 5, 180),
                    item(lunge.id, 3, 10, 90),
                    item(ohp.id, 4, 8, 120),
                ],
            ),
        ];

        let exercises = vec![
            bench, squat, deadlift, row, pullup, ohp, lunge, curl, extension,
        ];

        Self {
            foods,
            exercises,
            templates,
        }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_food(name: &str, kcal: f64, protein: f64, carb: f64, fat: f64) -> Food {
    Food {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        kcal_per_100g: kcal,
        protein_per_100g: protein,
        carb_per_100g: carb,
        fat_per_100g: fat,
        is_custom: false,
    }
}

const fn item(exercise_type_id: Uuid, sets: u32, reps: u32, rest_sec: u32) -> TemplateItem {
    TemplateItem {
        exercise_type_id,
        target_sets: sets,
        target_reps: reps,
        rest_sec,
    }
}
