// ABOUTME: Caller-owned application state with explicit load/save lifecycle
// ABOUTME: Holds profile, catalogs, and logs; passes data into the calculation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Application state
//!
//! All records live in one explicit [`AppState`] value owned by the caller.
//! The calculation engine receives pieces of this state by reference and
//! never reaches into storage itself. The intended lifecycle is
//! [`AppState::load`] once at startup and [`AppState::save`] after every
//! mutating operation.

use crate::config::NutritionConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{aggregator, energy, DailyTargets, DailyTotals};
use crate::models::{
    BodyWeightEntry, ExerciseType, Food, MealSlot, NutritionEntry, SavedMeal, SavedMealItem,
    UserProfile, WorkoutLog,
};
use crate::seed::SeedCatalog;
use crate::storage::{keys, BlobStore};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The whole single-user application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// User profile; `None` until onboarding completes
    pub profile: Option<UserProfile>,
    /// Food catalog (seeded plus user-defined)
    pub foods: Vec<Food>,
    /// Saved meals
    pub saved_meals: Vec<SavedMeal>,
    /// Logged nutrition entries, append-only
    pub entries: Vec<NutritionEntry>,
    /// Body weight history, append-only
    pub weight_log: Vec<BodyWeightEntry>,
    /// Exercise catalog
    pub exercises: Vec<ExerciseType>,
    /// Workout templates and sessions
    pub workouts: WorkoutLog,
}

impl AppState {
    /// Fresh state initialized from the seed catalogs
    #[must_use]
    pub fn seeded() -> Self {
        let catalog = SeedCatalog::new();
        Self {
            profile: None,
            foods: catalog.foods,
            saved_meals: Vec::new(),
            entries: Vec::new(),
            weight_log: Vec::new(),
            exercises: catalog.exercises,
            workouts: WorkoutLog {
                templates: catalog.templates,
                planned: Vec::new(),
                completed: Vec::new(),
            },
        }
    }

    /// Whether onboarding has completed (a profile exists)
    #[must_use]
    pub const fn is_onboarded(&self) -> bool {
        self.profile.is_some()
    }

    /// Set the profile for the first time
    pub fn complete_onboarding(&mut self, profile: UserProfile) {
        info!(goal = ?profile.goal, activity = ?profile.activity_level, "onboarding complete");
        self.profile = Some(profile);
    }

    /// Replace the profile (settings screen path)
    pub fn update_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Daily energy and macro targets for the current profile
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProfileMissing`] before onboarding.
    pub fn targets(&self, config: &NutritionConfig) -> AppResult<DailyTargets> {
        let profile = self.profile.as_ref().ok_or(AppError::ProfileMissing)?;
        Ok(energy::daily_targets(profile, config))
    }

    /// Look up a food by id
    #[must_use]
    pub fn food(&self, id: Uuid) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Add a food to the catalog
    pub fn add_food(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// Save a reusable meal
    pub fn save_meal(&mut self, name: impl Into<String>, items: Vec<SavedMealItem>) -> Uuid {
        let meal = SavedMeal::new(name, items);
        let id = meal.id;
        self.saved_meals.push(meal);
        id
    }

    /// Log `quantity_g` of a food on `date` in `slot`
    ///
    /// The entry's macro amounts are computed here, once, from the food's
    /// per-100g values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for a non-positive quantity and
    /// [`AppError::UnknownReference`] for a food id not in the catalog.
    pub fn log_food(
        &mut self,
        food_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
        quantity_g: f64,
    ) -> AppResult<Uuid> {
        if quantity_g <= 0.0 {
            return Err(AppError::invalid_input("quantity must be positive"));
        }
        let food = self
            .food(food_id)
            .ok_or(AppError::unknown_reference("food", food_id))?;
        let entry = NutritionEntry::from_food(food, date, slot, quantity_g);
        let id = entry.id;
        debug!(%id, food = %food.name, quantity_g, "logged food");
        self.entries.push(entry);
        Ok(id)
    }

    /// Log every item of a saved meal on `date` in `slot`
    ///
    /// Items whose food no longer exists in the catalog are skipped with a
    /// warning; the rest of the meal is still logged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownReference`] if the meal itself is unknown.
    pub fn log_saved_meal(
        &mut self,
        meal_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<Vec<Uuid>> {
        let meal = self
            .saved_meals
            .iter()
            .find(|m| m.id == meal_id)
            .ok_or(AppError::unknown_reference("saved meal", meal_id))?
            .clone();

        let mut logged = Vec::with_capacity(meal.items.len());
        for item in &meal.items {
            let Some(food) = self.food(item.food_id) else {
                warn!(meal = %meal.name, food_id = %item.food_id, "skipping dangling food reference");
                continue;
            };
            let entry = NutritionEntry::from_food(food, date, slot, item.quantity_g);
            logged.push(entry.id);
            self.entries.push(entry);
        }
        debug!(meal = %meal.name, count = logged.len(), "logged saved meal");
        Ok(logged)
    }

    /// Append a body weight measurement
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for a non-positive weight.
    pub fn log_weight(&mut self, weight_kg: f64, note: Option<String>) -> AppResult<Uuid> {
        if weight_kg <= 0.0 {
            return Err(AppError::invalid_input("weight must be positive"));
        }
        let entry = BodyWeightEntry::new(weight_kg, note);
        let id = entry.id;
        self.weight_log.push(entry);
        Ok(id)
    }

    /// Most recent body weight measurement, if any
    #[must_use]
    pub fn latest_weight(&self) -> Option<&BodyWeightEntry> {
        crate::models::body::latest(&self.weight_log)
    }

    /// Summed intake for a day
    #[must_use]
    pub fn totals_for(&self, date: NaiveDate) -> DailyTotals {
        aggregator::aggregate_by_date(&self.entries, date)
    }

    /// Per-slot intake breakdown for a day, in display order
    #[must_use]
    pub fn breakdown_for(&self, date: NaiveDate) -> [(MealSlot, DailyTotals); 5] {
        aggregator::daily_breakdown(&self.entries, date)
    }

    // ── Persistence lifecycle ───────────────────────────────────────────

    /// Load a snapshot from `store`, falling back to seeds for absent blobs
    ///
    /// A completely empty store yields [`AppState::seeded`]; a partial
    /// store (e.g. after a version that persisted fewer keys) keeps seeds
    /// for the missing sections.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] on storage failure or
    /// [`AppError::Serialization`] for a corrupt blob.
    pub fn load(store: &impl BlobStore) -> AppResult<Self> {
        let mut state = Self::seeded();
        if let Some(profile) = read_blob(store, keys::USER)? {
            state.profile = Some(profile);
        }
        if let Some(foods) = read_blob(store, keys::FOODS)? {
            state.foods = foods;
        }
        if let Some(meals) = read_blob(store, keys::SAVED_MEALS)? {
            state.saved_meals = meals;
        }
        if let Some(entries) = read_blob(store, keys::NUTRITION)? {
            state.entries = entries;
        }
        if let Some(weight) = read_blob(store, keys::WEIGHT)? {
            state.weight_log = weight;
        }
        if let Some(exercises) = read_blob(store, keys::EXERCISES)? {
            state.exercises = exercises;
        }
        if let Some(workouts) = read_blob(store, keys::WORKOUTS)? {
            state.workouts = workouts;
        }
        info!(
            onboarded = state.is_onboarded(),
            entries = state.entries.len(),
            "loaded application state"
        );
        Ok(state)
    }

    /// Persist the whole snapshot to `store`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] or [`AppError::Serialization`] on failure.
    pub fn save(&self, store: &impl BlobStore) -> AppResult<()> {
        if let Some(profile) = &self.profile {
            write_blob(store, keys::USER, profile)?;
        }
        write_blob(store, keys::FOODS, &self.foods)?;
        write_blob(store, keys::SAVED_MEALS, &self.saved_meals)?;
        write_blob(store, keys::NUTRITION, &self.entries)?;
        write_blob(store, keys::WEIGHT, &self.weight_log)?;
        write_blob(store, keys::EXERCISES, &self.exercises)?;
        write_blob(store, keys::WORKOUTS, &self.workouts)?;
        debug!("saved application state");
        Ok(())
    }

    /// Serialize the whole snapshot verbatim as one JSON document
    ///
    /// This is the user-facing "export my data" operation; it contains the
    /// same records the store holds, keyed by blob name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Serialization`] if any record fails to serialize.
    pub fn export(&self) -> AppResult<serde_json::Value> {
        let mut snapshot = serde_json::Map::new();
        snapshot.insert(keys::USER.to_owned(), serde_json::to_value(&self.profile)?);
        snapshot.insert(keys::FOODS.to_owned(), serde_json::to_value(&self.foods)?);
        snapshot.insert(
            keys::SAVED_MEALS.to_owned(),
            serde_json::to_value(&self.saved_meals)?,
        );
        snapshot.insert(
            keys::NUTRITION.to_owned(),
            serde_json::to_value(&self.entries)?,
        );
        snapshot.insert(
            keys::WEIGHT.to_owned(),
            serde_json::to_value(&self.weight_log)?,
        );
        snapshot.insert(
            keys::EXERCISES.to_owned(),
            serde_json::to_value(&self.exercises)?,
        );
        snapshot.insert(
            keys::WORKOUTS.to_owned(),
            serde_json::to_value(&self.workouts)?,
        );
        Ok(serde_json::Value::Object(snapshot))
    }

    /// Discard every persisted blob
    ///
    /// The in-memory state is untouched; callers typically drop it and
    /// start over from [`AppState::seeded`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] on storage failure.
    pub fn hard_reset(store: &impl BlobStore) -> AppResult<()> {
        warn!("hard reset: discarding all persisted state");
        store.clear()
    }
}

fn read_blob<T: DeserializeOwned>(store: &impl BlobStore, key: &str) -> AppResult<Option<T>> {
    match store.get(key)? {
        Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
        None => Ok(None),
    }
}

fn write_blob<T: Serialize>(store: &impl BlobStore, key: &str, value: &T) -> AppResult<()> {
    store.put(key, &serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal, MacroOverrides, Sex};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn onboarded_state() -> AppState {
        let mut state = AppState::seeded();
        state.complete_onboarding(UserProfile {
            sex: Sex::Male,
            age_years: 30,
            height_cm: 180.0,
            current_weight_kg: 80.0,
            goal: Goal::Maintain,
            activity_level: ActivityLevel::Moderate,
            macro_overrides: MacroOverrides::default(),
        });
        state
    }

    #[test]
    fn test_targets_require_profile() {
        let state = AppState::seeded();
        assert!(matches!(
            state.targets(&NutritionConfig::default()),
            Err(AppError::ProfileMissing)
        ));

        let state = onboarded_state();
        let targets = state.targets(&NutritionConfig::default()).unwrap();
        assert_eq!(targets.calories, 2759);
    }

    #[test]
    fn test_log_food_appends_entry() {
        let mut state = onboarded_state();
        let rice_id = state
            .foods
            .iter()
            .find(|f| f.name == "White rice")
            .unwrap()
            .id;

        let day = date(2024, 1, 15);
        state.log_food(rice_id, day, MealSlot::Lunch, 150.0).unwrap();
        assert_eq!(state.entries.len(), 1);
        assert!((state.totals_for(day).kcal - 195.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_food_rejects_bad_input() {
        let mut state = onboarded_state();
        let rice_id = state.foods[0].id;
        let day = date(2024, 1, 15);

        assert!(matches!(
            state.log_food(rice_id, day, MealSlot::Lunch, 0.0),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            state.log_food(Uuid::new_v4(), day, MealSlot::Lunch, 100.0),
            Err(AppError::UnknownReference { kind: "food", .. })
        ));
        assert!(state.entries.is_empty());
    }

    #[test]
    fn test_log_saved_meal_expands_items() {
        let mut state = onboarded_state();
        let rice_id = state.foods[0].id;
        let egg_id = state.foods.iter().find(|f| f.name == "Egg").unwrap().id;
        let meal_id = state.save_meal(
            "Rice and eggs",
            vec![
                SavedMealItem {
                    food_id: rice_id,
                    quantity_g: 200.0,
                },
                SavedMealItem {
                    food_id: egg_id,
                    quantity_g: 120.0,
                },
            ],
        );

        let day = date(2024, 1, 15);
        let logged = state.log_saved_meal(meal_id, day, MealSlot::Dinner).unwrap();
        assert_eq!(logged.len(), 2);
        // 260 kcal of rice + 186 kcal of egg
        assert!((state.totals_for(day).kcal - 446.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_saved_meal_skips_dangling_food() {
        let mut state = onboarded_state();
        let rice_id = state.foods[0].id;
        let meal_id = state.save_meal(
            "Half broken",
            vec![
                SavedMealItem {
                    food_id: rice_id,
                    quantity_g: 100.0,
                },
                SavedMealItem {
                    food_id: Uuid::new_v4(),
                    quantity_g: 100.0,
                },
            ],
        );

        let logged = state
            .log_saved_meal(meal_id, date(2024, 1, 15), MealSlot::Lunch)
            .unwrap();
        assert_eq!(logged.len(), 1);
    }

    #[test]
    fn test_log_weight_validates() {
        let mut state = onboarded_state();
        state.log_weight(79.4, Some("morning".into())).unwrap();
        assert!(state.log_weight(-3.0, None).is_err());
        assert_eq!(state.weight_log.len(), 1);
        assert!((state.latest_weight().unwrap().weight_kg - 79.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_export_contains_all_sections() {
        let state = onboarded_state();
        let export = state.export().unwrap();
        for key in keys::ALL {
            assert!(export.get(key).is_some(), "export missing section {key}");
        }
    }
}
