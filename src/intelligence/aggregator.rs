// ABOUTME: Daily aggregation of nutrition entries by date and meal slot
// ABOUTME: Single-pass deterministic sums plus safe percentage computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Nutrition Aggregator
//!
//! Rolls logged [`NutritionEntry`] records up into per-day and per-slot
//! totals for comparison against [`crate::intelligence::energy`] targets.
//! The aggregator holds no state between calls; it is re-run on every read.
//!
//! Sums are accumulated in a single left-to-right pass over the supplied
//! slice so that repeated runs over the same collection are bit-identical.

use crate::models::{MealSlot, NutritionEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summed calories and macros over a set of entries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    /// Total calories
    pub kcal: f64,
    /// Total protein (grams)
    pub protein_g: f64,
    /// Total carbohydrates (grams)
    pub carb_g: f64,
    /// Total fat (grams)
    pub fat_g: f64,
}

impl DailyTotals {
    fn accumulate(&mut self, entry: &NutritionEntry) {
        self.kcal += entry.kcal;
        self.protein_g += entry.protein_g;
        self.carb_g += entry.carb_g;
        self.fat_g += entry.fat_g;
    }
}

/// Sum all entries whose date equals `date`
///
/// Date comparison is exact calendar-date equality; callers are expected to
/// derive entry dates and the query date from the same "current day"
/// source. An empty match set yields all-zero totals.
#[must_use]
pub fn aggregate_by_date(entries: &[NutritionEntry], date: NaiveDate) -> DailyTotals {
    let mut totals = DailyTotals::default();
    for entry in entries.iter().filter(|e| e.date == date) {
        totals.accumulate(entry);
    }
    totals
}

/// Sum entries matching both `date` and `slot`
#[must_use]
pub fn aggregate_by_meal_slot(
    entries: &[NutritionEntry],
    date: NaiveDate,
    slot: MealSlot,
) -> DailyTotals {
    let mut totals = DailyTotals::default();
    for entry in entries
        .iter()
        .filter(|e| e.date == date && e.meal_slot == slot)
    {
        totals.accumulate(entry);
    }
    totals
}

/// Per-slot subtotals for one day, in fixed display order
#[must_use]
pub fn daily_breakdown(
    entries: &[NutritionEntry],
    date: NaiveDate,
) -> [(MealSlot, DailyTotals); 5] {
    MealSlot::ALL.map(|slot| (slot, aggregate_by_meal_slot(entries, date, slot)))
}

/// Safe percent: `actual / target * 100`, or 0 when the target is not positive
///
/// Every ratio shown to the user goes through this so that an unset or zero
/// target renders as 0% instead of infinity or NaN.
#[must_use]
pub fn percentage_of_target(actual: f64, target: f64) -> f64 {
    if target > 0.0 {
        actual / target * 100.0
    } else {
        0.0
    }
}
