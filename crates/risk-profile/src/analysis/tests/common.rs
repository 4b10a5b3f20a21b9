use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::analysis::domain::{
    House, MaritalStatus, OwnershipStatus, RiskAnswer, Subject, SubjectSubmission, Vehicle,
};
use crate::analysis::{analysis_router, RiskEngine, Thresholds};

pub(super) const EVALUATION_YEAR: i32 = 2022;

pub(super) fn thresholds() -> Thresholds {
    Thresholds {
        minimum_income: 1,
        comfortable_income: 200_000,
        minimum_age: 30,
        maximum_age: 60,
    }
}

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new(thresholds())
}

/// Mid-band single applicant with a thin income and no assets.
pub(super) fn subject() -> Subject {
    Subject {
        age: 35,
        dependents: 0,
        income: 100_000,
        marital_status: MaritalStatus::Single,
        risk_questions: [false, false, false],
        house: None,
        vehicle: None,
    }
}

pub(super) fn owned_house() -> Option<House> {
    Some(House {
        ownership_status: OwnershipStatus::Owned,
    })
}

pub(super) fn mortgaged_house() -> Option<House> {
    Some(House {
        ownership_status: OwnershipStatus::Mortgaged,
    })
}

pub(super) fn vehicle(year: i32) -> Option<Vehicle> {
    Some(Vehicle { year })
}

pub(super) fn submission() -> SubjectSubmission {
    SubjectSubmission {
        age: 35,
        dependents: 2,
        income: 120_000,
        marital_status: MaritalStatus::Married,
        risk_questions: vec![RiskAnswer(false), RiskAnswer(true), RiskAnswer(false)],
        house: owned_house(),
        vehicle: vehicle(2018),
    }
}

pub(super) fn router() -> axum::Router {
    analysis_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
