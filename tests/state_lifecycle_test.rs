// ABOUTME: Integration tests for application state persistence lifecycle
// ABOUTME: Load/save round trips, seeding on empty stores, export, and hard reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! State lifecycle tests against a real file-backed blob store

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use macrotrack::config::NutritionConfig;
use macrotrack::models::{ActivityLevel, Goal, MacroOverrides, MealSlot, Sex, UserProfile};
use macrotrack::state::AppState;
use macrotrack::storage::{keys, BlobStore, FileStore};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profile() -> UserProfile {
    UserProfile {
        sex: Sex::Male,
        age_years: 30,
        height_cm: 180.0,
        current_weight_kg: 80.0,
        goal: Goal::Maintain,
        activity_level: ActivityLevel::Moderate,
        macro_overrides: MacroOverrides::default(),
    }
}

#[test]
fn test_empty_store_loads_seeded_state() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let state = AppState::load(&store).unwrap();
    assert!(!state.is_onboarded());
    assert_eq!(state.foods.len(), 6);
    assert_eq!(state.workouts.templates.len(), 3);
    assert!(state.entries.is_empty());
}

#[test]
fn test_save_load_round_trip_preserves_everything() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let mut state = AppState::load(&store).unwrap();
    state.complete_onboarding(profile());

    let rice_id = state
        .foods
        .iter()
        .find(|f| f.name == "White rice")
        .unwrap()
        .id;
    let day = date(2024, 1, 15);
    state.log_food(rice_id, day, MealSlot::Lunch, 150.0).unwrap();
    state.log_weight(79.6, Some("morning".into())).unwrap();

    let template_id = state.workouts.templates[0].id;
    let session_id = state.workouts.schedule(template_id, day).unwrap();
    state
        .workouts
        .complete(session_id, Some("solid session".into()), 7)
        .unwrap();

    state.save(&store).unwrap();

    let reloaded = AppState::load(&store).unwrap();
    assert_eq!(reloaded.profile, state.profile);
    assert_eq!(reloaded.entries, state.entries);
    assert_eq!(reloaded.weight_log, state.weight_log);
    assert_eq!(reloaded.workouts, state.workouts);
    assert_eq!(reloaded.foods, state.foods);

    // Catalog ids stay stable across restarts, so logged references resolve
    assert!(reloaded.food(rice_id).is_some());
    assert!((reloaded.totals_for(day).kcal - 195.0).abs() < 1e-9);
}

#[test]
fn test_targets_survive_reload() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let mut state = AppState::load(&store).unwrap();
    state.complete_onboarding(profile());
    state.save(&store).unwrap();

    let reloaded = AppState::load(&store).unwrap();
    let targets = reloaded.targets(&NutritionConfig::default()).unwrap();
    assert_eq!(targets.calories, 2759);
    assert_eq!(targets.macros.protein_g, 144);
}

#[test]
fn test_export_matches_persisted_sections() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let mut state = AppState::load(&store).unwrap();
    state.complete_onboarding(profile());
    state.save(&store).unwrap();

    let export = state.export().unwrap();
    // The export carries the same records the store holds, blob for blob
    let stored_user: serde_json::Value =
        serde_json::from_str(&store.get(keys::USER).unwrap().unwrap()).unwrap();
    assert_eq!(export[keys::USER], stored_user);

    let stored_foods: serde_json::Value =
        serde_json::from_str(&store.get(keys::FOODS).unwrap().unwrap()).unwrap();
    assert_eq!(export[keys::FOODS], stored_foods);
}

#[test]
fn test_hard_reset_discards_all_blobs() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let mut state = AppState::load(&store).unwrap();
    state.complete_onboarding(profile());
    state.save(&store).unwrap();
    assert!(store.get(keys::USER).unwrap().is_some());

    AppState::hard_reset(&store).unwrap();
    for key in keys::ALL {
        assert!(store.get(key).unwrap().is_none(), "blob {key} should be gone");
    }

    // The next load starts over from seeds
    let fresh = AppState::load(&store).unwrap();
    assert!(!fresh.is_onboarded());
}

#[test]
fn test_corrupt_blob_is_an_error_not_a_panic() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store.put(keys::NUTRITION, "not json at all").unwrap();

    let result = AppState::load(&store);
    assert!(result.is_err());
}
