// ABOUTME: Deterministic calculation engine for energy targets and daily aggregation
// ABOUTME: Pure functions only; no state, no I/O, no error paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Calculation engine
//!
//! Everything in this module is a pure transformation from inputs to
//! outputs. The engine owns no state and performs no I/O, so concurrent
//! callers are safe by construction. It is also *total*: no function here
//! returns `Result` or panics over its documented domain. Degenerate inputs
//! degrade along documented branches (zero-target percentages yield 0,
//! carb budgets floor at zero) instead of failing, so downstream displays
//! always have a number to show.

/// Daily aggregation of logged nutrition entries
pub mod aggregator;

/// Energy model: BMR, TDEE, goal-adjusted calories, macro split
pub mod energy;

pub use aggregator::{
    aggregate_by_date, aggregate_by_meal_slot, daily_breakdown, percentage_of_target, DailyTotals,
};
pub use energy::{
    adjust_for_goal, compute_bmr, compute_macros, compute_tdee, daily_targets, DailyTargets,
    MacroTarget,
};
