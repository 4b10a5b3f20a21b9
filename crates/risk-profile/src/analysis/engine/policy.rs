use super::rules::{RawScore, Score};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insurance lines covered by a risk profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Auto,
    Disability,
    Home,
    Life,
}

impl Product {
    pub const ALL: [Self; 4] = [Self::Auto, Self::Disability, Self::Home, Self::Life];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Disability => "disability",
            Self::Home => "home",
            Self::Life => "life",
        }
    }
}

/// Eligibility classification reported per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Economic,
    Regular,
    Responsible,
    Ineligible,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Economic => "economic",
            Self::Regular => "regular",
            Self::Responsible => "responsible",
            Self::Ineligible => "ineligible",
        }
    }

    pub(crate) fn from_score(score: Score) -> Self {
        match score {
            Score::Ineligible => Self::Ineligible,
            Score::Points(points) if points < 1 => Self::Economic,
            Score::Points(1 | 2) => Self::Regular,
            Score::Points(_) => Self::Responsible,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final per-product tiers returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskProfile {
    pub auto: Tier,
    pub disability: Tier,
    pub home: Tier,
    pub life: Tier,
}

impl RiskProfile {
    pub fn tier(&self, product: Product) -> Tier {
        match product {
            Product::Auto => self.auto,
            Product::Disability => self.disability,
            Product::Home => self.home,
            Product::Life => self.life,
        }
    }

    pub(crate) fn from_raw(raw: &RawScore) -> Self {
        Self {
            auto: Tier::from_score(raw.get(Product::Auto)),
            disability: Tier::from_score(raw.get(Product::Disability)),
            home: Tier::from_score(raw.get(Product::Home)),
            life: Tier::from_score(raw.get(Product::Life)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_follow_bucket_policy() {
        assert_eq!(Tier::from_score(Score::Points(-4)), Tier::Economic);
        assert_eq!(Tier::from_score(Score::Points(0)), Tier::Economic);
        assert_eq!(Tier::from_score(Score::Points(1)), Tier::Regular);
        assert_eq!(Tier::from_score(Score::Points(2)), Tier::Regular);
        assert_eq!(Tier::from_score(Score::Points(3)), Tier::Responsible);
        assert_eq!(Tier::from_score(Score::Points(7)), Tier::Responsible);
        assert_eq!(Tier::from_score(Score::Ineligible), Tier::Ineligible);
    }

    #[test]
    fn profile_serializes_with_product_keys() {
        let profile = RiskProfile {
            auto: Tier::Regular,
            disability: Tier::Ineligible,
            home: Tier::Economic,
            life: Tier::Responsible,
        };

        let value = serde_json::to_value(profile).expect("profile serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "auto": "regular",
                "disability": "ineligible",
                "home": "economic",
                "life": "responsible"
            })
        );
        for product in Product::ALL {
            assert_eq!(value[product.label()], profile.tier(product).label());
        }
    }
}
