use serde::Serialize;

use super::domain::{Subject, SubjectSubmission, Vehicle, RISK_QUESTION_COUNT};

/// First production year accepted for a declared vehicle.
pub const EARLIEST_VEHICLE_YEAR: i32 = 1886;

/// A single field that failed intake validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Every violation found in a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid submission: {}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|violation| violation.field.as_str())
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turns raw questionnaire submissions into validated `Subject` records.
#[derive(Debug, Clone)]
pub struct IntakeValidator {
    earliest_vehicle_year: i32,
}

impl Default for IntakeValidator {
    fn default() -> Self {
        Self {
            earliest_vehicle_year: EARLIEST_VEHICLE_YEAR,
        }
    }
}

impl IntakeValidator {
    /// Validates a submission. Vehicles must be built before `current_year`.
    pub fn validate(
        &self,
        submission: SubjectSubmission,
        current_year: i32,
    ) -> Result<Subject, ValidationError> {
        let mut violations = Vec::new();

        let age = non_negative::<u32>("age", submission.age, &mut violations);
        let dependents = non_negative::<u32>("dependents", submission.dependents, &mut violations);
        let income = non_negative::<u64>("income", submission.income, &mut violations);

        let risk_questions: Option<[bool; RISK_QUESTION_COUNT]> = submission
            .risk_questions
            .iter()
            .map(|answer| answer.0)
            .collect::<Vec<_>>()
            .try_into()
            .ok();
        if risk_questions.is_none() {
            violations.push(FieldViolation::new(
                "risk_questions",
                format!(
                    "expected exactly {RISK_QUESTION_COUNT} answers, found {}",
                    submission.risk_questions.len()
                ),
            ));
        }

        if let Some(Vehicle { year }) = submission.vehicle {
            if year < self.earliest_vehicle_year || year >= current_year {
                violations.push(FieldViolation::new(
                    "vehicle.year",
                    format!(
                        "must be between {} and {} inclusive, found {year}",
                        self.earliest_vehicle_year,
                        current_year - 1
                    ),
                ));
            }
        }

        match (age, dependents, income, risk_questions) {
            (Some(age), Some(dependents), Some(income), Some(risk_questions))
                if violations.is_empty() =>
            {
                Ok(Subject {
                    age,
                    dependents,
                    income,
                    marital_status: submission.marital_status,
                    risk_questions,
                    house: submission.house,
                    vehicle: submission.vehicle,
                })
            }
            _ => Err(ValidationError { violations }),
        }
    }
}

fn non_negative<T: TryFrom<i64>>(
    field: &str,
    value: i64,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    if value < 0 {
        violations.push(FieldViolation::new(
            field,
            format!("must be greater than or equal to 0, found {value}"),
        ));
        return None;
    }

    match T::try_from(value) {
        Ok(converted) => Some(converted),
        Err(_) => {
            violations.push(FieldViolation::new(
                field,
                format!("value {value} is out of range"),
            ));
            None
        }
    }
}
