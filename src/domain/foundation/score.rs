//! Score value object (percentage on a 0-100 scale).
//!
//! Quiz results are fractional (one of three correct is 33.33...), so the
//! score keeps the full `f64` value rather than rounding to whole percent.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Score, clamping to the valid range. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Score, returning error if out of range or not a number.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() {
            return Err(ValidationError::invalid_format("score", "must be a number"));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                0,
                100,
                value.round() as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Builds a score from a correct count out of a total.
    ///
    /// An empty total scores zero.
    pub fn from_ratio(correct: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        Self::new(correct as f64 * 100.0 / total as f64)
    }

    /// Returns the raw percentage.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Self::new(f64::from(value))
    }
}
