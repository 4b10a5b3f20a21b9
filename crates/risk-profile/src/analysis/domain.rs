use serde::{Deserialize, Serialize};

/// Number of questions in the fixed risk questionnaire.
pub const RISK_QUESTION_COUNT: usize = 3;

/// Marital status as collected on the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

/// Whether the declared house is owned outright or still mortgaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipStatus {
    Owned,
    Mortgaged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub ownership_status: OwnershipStatus,
}

impl House {
    pub fn is_mortgaged(&self) -> bool {
        self.ownership_status == OwnershipStatus::Mortgaged
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Manufacture year.
    pub year: i32,
}

/// Validated applicant record consumed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub age: u32,
    pub dependents: u32,
    pub income: u64,
    pub marital_status: MaritalStatus,
    pub risk_questions: [bool; RISK_QUESTION_COUNT],
    pub house: Option<House>,
    pub vehicle: Option<Vehicle>,
}

impl Subject {
    /// Count of questionnaire answers flagged `true`.
    pub fn risk_answer_total(&self) -> i32 {
        self.risk_questions.iter().filter(|answer| **answer).count() as i32
    }

    pub fn is_married(&self) -> bool {
        self.marital_status == MaritalStatus::Married
    }

    pub fn has_mortgaged_house(&self) -> bool {
        self.house.as_ref().is_some_and(House::is_mortgaged)
    }

    pub fn has_dependents(&self) -> bool {
        self.dependents > 0
    }
}

/// Raw questionnaire payload as received from callers, prior to intake validation.
///
/// Numeric fields are signed so that negative values survive deserialization and can be
/// reported per field by the validator instead of failing the whole body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSubmission {
    pub age: i64,
    pub dependents: i64,
    pub income: i64,
    pub marital_status: MaritalStatus,
    pub risk_questions: Vec<RiskAnswer>,
    #[serde(default)]
    pub house: Option<House>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
}

/// Single questionnaire answer. Accepts JSON booleans as well as the integers `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AnswerRepr", into = "bool")]
pub struct RiskAnswer(pub bool);

impl From<bool> for RiskAnswer {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<RiskAnswer> for bool {
    fn from(value: RiskAnswer) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerRepr {
    Flag(bool),
    Numeric(i64),
}

impl TryFrom<AnswerRepr> for RiskAnswer {
    type Error = String;

    fn try_from(value: AnswerRepr) -> Result<Self, Self::Error> {
        match value {
            AnswerRepr::Flag(flag) => Ok(Self(flag)),
            AnswerRepr::Numeric(0) => Ok(Self(false)),
            AnswerRepr::Numeric(1) => Ok(Self(true)),
            AnswerRepr::Numeric(other) => Err(format!(
                "risk answer must be a boolean or 0/1, found {other}"
            )),
        }
    }
}
