// ABOUTME: Intelligence module re-exports from the nourish-intelligence crate
// ABOUTME: Preserves nourish::intelligence import paths for consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! # Intelligence Module
//!
//! Analysis and coaching intelligence for nutrition data. This module
//! re-exports from the `nourish-intelligence` crate so existing import
//! paths keep working after the engine's extraction into its own crate.

pub use nourish_intelligence::*;

// Re-export submodules for path-based access
// (e.g., nourish::intelligence::statistics::consistency_score)
pub use nourish_intelligence::{
    adherence, aggregator, analysis_config, analyzer, insights, nutrition_constants, patterns,
    quality, recommendations, statistics, trends,
};
