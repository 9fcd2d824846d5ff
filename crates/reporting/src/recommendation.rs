use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stock action suggested for a product for next month.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    IncreaseStock,
    MaintainStock,
    ReduceStock,
}

impl core::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Recommendation::IncreaseStock => "increase stock",
            Recommendation::MaintainStock => "maintain stock",
            Recommendation::ReduceStock => "reduce stock",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommendationPolicyError {
    #[error("band factors must be finite and non-negative (lower={lower}, upper={upper})")]
    NotFinite { lower: f64, upper: f64 },

    #[error("lower factor {lower} exceeds upper factor {upper}")]
    Inverted { lower: f64, upper: f64 },
}

/// Band around the mean quantity inside which stock is kept as is.
///
/// Above `mean * upper` stock should grow; below `mean * lower` it should shrink.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RecommendationPolicy {
    lower: f64,
    upper: f64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self { lower: 0.8, upper: 1.2 }
    }
}

impl RecommendationPolicy {
    pub fn new(lower: f64, upper: f64) -> Result<Self, RecommendationPolicyError> {
        if !(lower.is_finite() && upper.is_finite() && lower >= 0.0 && upper >= 0.0) {
            return Err(RecommendationPolicyError::NotFinite { lower, upper });
        }
        if lower > upper {
            return Err(RecommendationPolicyError::Inverted { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn recommend(&self, quantity: u32, mean_quantity: f64) -> Recommendation {
        let quantity = f64::from(quantity);
        if quantity > mean_quantity * self.upper {
            Recommendation::IncreaseStock
        } else if quantity < mean_quantity * self.lower {
            Recommendation::ReduceStock
        } else {
            Recommendation::MaintainStock
        }
    }
}
