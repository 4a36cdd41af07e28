// ABOUTME: Main library entry point for the macrotrack fitness tracking core
// ABOUTME: Energy target computation, nutrition aggregation, and training log state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

#![deny(unsafe_code)]

//! # Macrotrack
//!
//! A single-user fitness tracking core library. The crate owns no UI and no
//! network surface: a caller (desktop shell, CLI, mobile bridge) supplies a
//! user profile and logged records, and consumes computed numbers.
//!
//! ## Architecture
//!
//! - **Intelligence**: the deterministic calculation engine — basal metabolic
//!   rate, total daily energy expenditure, goal-adjusted calorie targets and
//!   macro splits, plus daily aggregation of logged nutrition entries.
//! - **Models**: domain records (profile, foods, nutrition entries, body
//!   weight, workout templates and sessions).
//! - **State**: an explicit application-state object owned by the caller,
//!   with load/save lifecycle calls against a blob store.
//! - **Storage**: JSON blob persistence under fixed keys.
//! - **Config**: value tables (activity factors, goal adjustments, macro
//!   rules) with researched defaults.
//!
//! The calculation engine itself is total: it never returns an error and
//! never panics over its documented domain. Unrecognized enum-like inputs
//! degrade to named default variants rather than failing.
//!
//! ## Example
//!
//! ```rust
//! use macrotrack::config::NutritionConfig;
//! use macrotrack::intelligence::energy;
//! use macrotrack::models::{ActivityLevel, Goal, MacroOverrides, Sex, UserProfile};
//!
//! let profile = UserProfile {
//!     sex: Sex::Male,
//!     age_years: 30,
//!     height_cm: 180.0,
//!     current_weight_kg: 80.0,
//!     goal: Goal::Maintain,
//!     activity_level: ActivityLevel::Moderate,
//!     macro_overrides: MacroOverrides::default(),
//! };
//! let targets = energy::daily_targets(&profile, &NutritionConfig::default());
//! assert_eq!(targets.calories, 2759);
//! assert_eq!(targets.macros.protein_g, 144);
//! ```

/// Value tables for energy and macro calculations
pub mod config;

/// Unified error handling with a single application error type
pub mod errors;

/// Deterministic calculation engine: energy model and nutrition aggregation
pub mod intelligence;

/// Structured logging setup for embedding callers
pub mod logging;

/// Domain data models
pub mod models;

/// Seed catalogs for first-run state
pub mod seed;

/// Caller-owned application state with explicit load/save lifecycle
pub mod state;

/// Blob persistence under fixed keys
pub mod storage;
