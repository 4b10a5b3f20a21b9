use super::super::domain::Subject;
use super::config::Thresholds;
use super::policy::Product;

/// Vehicles at most this many years old earn the recent-vehicle adjustment.
const RECENT_VEHICLE_YEARS: i64 = 5;

/// Per-product accumulator. `Ineligible` absorbs every later adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Score {
    Points(i32),
    Ineligible,
}

impl Score {
    fn adjusted(self, delta: i32) -> Self {
        match self {
            Score::Points(points) => Score::Points(points + delta),
            Score::Ineligible => Score::Ineligible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawScore {
    pub auto: Score,
    pub disability: Score,
    pub home: Score,
    pub life: Score,
}

impl RawScore {
    fn uniform(score: Score) -> Self {
        Self {
            auto: score,
            disability: score,
            home: score,
            life: score,
        }
    }

    pub(crate) fn get(&self, product: Product) -> Score {
        match product {
            Product::Auto => self.auto,
            Product::Disability => self.disability,
            Product::Home => self.home,
            Product::Life => self.life,
        }
    }

    fn slot(&mut self, product: Product) -> &mut Score {
        match product {
            Product::Auto => &mut self.auto,
            Product::Disability => &mut self.disability,
            Product::Home => &mut self.home,
            Product::Life => &mut self.life,
        }
    }

    fn adjust(&mut self, product: Product, delta: i32) {
        let slot = self.slot(product);
        *slot = slot.adjusted(delta);
    }

    fn adjust_all(&mut self, delta: i32) {
        for product in Product::ALL {
            self.adjust(product, delta);
        }
    }

    fn disqualify(&mut self, product: Product) {
        *self.slot(product) = Score::Ineligible;
    }
}

/// Runs the ordered adjustment rules against a subject.
pub(crate) fn score_subject(
    subject: &Subject,
    thresholds: &Thresholds,
    current_year: i32,
) -> RawScore {
    if subject.income < thresholds.minimum_income {
        return RawScore::uniform(Score::Ineligible);
    }

    let mut raw = RawScore::uniform(Score::Points(subject.risk_answer_total()));

    if subject.income < thresholds.comfortable_income {
        raw.adjust_all(-1);
    }

    if subject.has_mortgaged_house() {
        raw.adjust(Product::Home, 1);
        raw.adjust(Product::Disability, -1);
    }

    if subject.has_dependents() {
        raw.adjust(Product::Home, 1);
        raw.adjust(Product::Disability, 1);
    }

    if subject.is_married() {
        raw.adjust(Product::Life, 1);
        raw.adjust(Product::Disability, -1);
    }

    if let Some(vehicle) = &subject.vehicle {
        if i64::from(current_year) - i64::from(vehicle.year) <= RECENT_VEHICLE_YEARS {
            raw.adjust(Product::Auto, 1);
        }
    }

    // The two age bands are independent checks, not an if/else chain.
    if thresholds.minimum_age < subject.age && subject.age < thresholds.maximum_age {
        raw.adjust_all(-1);
    }

    if subject.age < thresholds.minimum_age {
        raw.adjust_all(-2);
    }

    if subject.age >= thresholds.maximum_age {
        raw.disqualify(Product::Life);
        raw.disqualify(Product::Disability);
    }

    raw
}
