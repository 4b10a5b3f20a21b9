use serde::{Deserialize, Serialize};

/// Underwriting limits applied by the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Income below this value makes every product ineligible.
    pub minimum_income: u64,
    /// Income below this value costs one point on every product.
    pub comfortable_income: u64,
    pub minimum_age: u32,
    pub maximum_age: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            minimum_income: 1,
            comfortable_income: 200_000,
            minimum_age: 30,
            maximum_age: 60,
        }
    }
}
