// ABOUTME: Configuration module for calculation value tables
// ABOUTME: Re-exports nutrition configuration types used by the energy model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Configuration for the calculation engine
//!
//! All formula constants live in serde-roundtrippable structs whose
//! `Default` impls hold the published values. Callers that want to tune a
//! coefficient construct a modified config; the engine itself never reads
//! the environment or any global.

/// Nutrition calculation value tables (BMR, activity factors, goals, macros)
pub mod nutrition;

pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroRulesConfig, NutritionConfig,
};
