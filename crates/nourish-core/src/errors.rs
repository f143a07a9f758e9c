// ABOUTME: Error types for the nutrition analysis engine
// ABOUTME: AnalysisError enum and AnalysisResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nourish Intelligence

//! Error handling for the analysis engine.
//!
//! The engine favors graceful degradation: thin data yields low-confidence or
//! empty results, never an error. `AnalysisError` is reserved for boundary
//! contract violations (non-finite or negative numerics in caller-supplied
//! records) and for internal computation failures that should never occur on
//! validated input.

use thiserror::Error;

/// Errors that can occur during analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Not enough data to run the requested analysis
    #[error("insufficient data for analysis: {0}")]
    InsufficientData(String),

    /// Caller-supplied records violate the input contract
    #[error("invalid input data: {0}")]
    InvalidData(String),

    /// Internal computation failed
    #[error("analysis computation failed: {0}")]
    ComputationError(String),
}

impl AnalysisError {
    /// Convenience constructor for invalid-input errors
    #[must_use]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }
}

/// Result alias used throughout the engine
pub type AnalysisResult<T> = Result<T, AnalysisError>;
