//! Bias ratio normalization.
//!
//! The engine does not score bias itself: the two weights arrive from an
//! external analysis collaborator. Validation happens once, here at the
//! boundary, so the ratio math is total - the division-by-zero state is
//! unrepresentable instead of being a documented caller obligation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Validated pair of non-negative bias weights with a positive sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiasWeights {
    left: f64,
    right: f64,
}

/// Normalized percentage pair; the two sides sum to 100 within floating
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasRatio {
    /// Left share of the bar, in percent.
    pub left_ratio: f64,

    /// Right share of the bar, in percent.
    pub right_ratio: f64,
}

impl BiasWeights {
    /// Validate a pair of externally supplied weights.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBiasWeight` when either weight is negative,
    /// NaN, or infinite, and `Error::ZeroBiasTotal` when both are zero.
    pub fn new(left: f64, right: f64) -> Result<Self> {
        if !left.is_finite() || !right.is_finite() || left < 0.0 || right < 0.0 {
            return Err(Error::InvalidBiasWeight { left, right });
        }
        if left + right == 0.0 {
            return Err(Error::ZeroBiasTotal);
        }
        Ok(Self { left, right })
    }

    /// Left weight as supplied.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right weight as supplied.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Normalize the weights so the two sides sum to 100.
    #[must_use]
    pub fn ratios(&self) -> BiasRatio {
        let total = self.left + self.right;
        BiasRatio {
            left_ratio: 100.0 * self.left / total,
            right_ratio: 100.0 * self.right / total,
        }
    }
}
