// ABOUTME: Structured logging setup for embedding callers and integration tests
// ABOUTME: Configures tracing-subscriber with env-filter based level control
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! Logging configuration with structured output
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the embedding application's job. [`init_logging`] is a convenience for
//! callers (and tests) that do not bring their own subscriber.

use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from the `RUST_LOG` environment variable
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        Self {
            level,
            ..Self::default()
        }
    }

    /// Install a global subscriber for this configuration
    ///
    /// Returns quietly if a global subscriber is already set, so tests can
    /// call this repeatedly without panicking.
    pub fn init(&self) {
        let filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = fmt()
            .with_env_filter(filter)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_target(true)
            .try_init()
            .is_ok();

        if installed {
            info!(
                version = env!("CARGO_PKG_VERSION"),
                level = %self.level,
                "macrotrack logging initialized"
            );
        }
    }
}

/// Initialize logging from the environment with defaults
pub fn init_logging() {
    LoggingConfig::from_env().init();
}
