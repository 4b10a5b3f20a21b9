//! Insurance risk analysis: questionnaire intake, rule scoring, and the HTTP surface.

pub mod domain;
pub mod engine;
pub mod intake;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{
    House, MaritalStatus, OwnershipStatus, RiskAnswer, Subject, SubjectSubmission, Vehicle,
};
pub use engine::{current_year, evaluate, Product, RiskEngine, RiskProfile, Thresholds, Tier};
pub use intake::{FieldViolation, IntakeValidator, ValidationError};
pub use router::analysis_router;
