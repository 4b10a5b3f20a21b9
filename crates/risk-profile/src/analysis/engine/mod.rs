mod config;
mod policy;
mod rules;

pub use config::Thresholds;
pub use policy::{Product, RiskProfile, Tier};

#[cfg(test)]
pub(crate) use rules::{score_subject, Score};

use super::domain::Subject;
use chrono::Datelike;

/// Scores a subject against the given thresholds.
///
/// `current_year` drives the recent-vehicle rule; pass it explicitly so that repeated
/// evaluations are reproducible.
pub fn evaluate(subject: &Subject, thresholds: &Thresholds, current_year: i32) -> RiskProfile {
    let raw = rules::score_subject(subject, thresholds, current_year);
    RiskProfile::from_raw(&raw)
}

/// Calendar year according to the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Stateless evaluator bound to a fixed set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    thresholds: Thresholds,
}

impl RiskEngine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn evaluate_at(&self, subject: &Subject, current_year: i32) -> RiskProfile {
        evaluate(subject, &self.thresholds, current_year)
    }

    /// Evaluates using the clock's current year, read once per call.
    pub fn evaluate(&self, subject: &Subject) -> RiskProfile {
        self.evaluate_at(subject, current_year())
    }
}
