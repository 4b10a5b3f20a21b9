use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{debug, info};

use super::domain::SubjectSubmission;
use super::engine::{current_year, RiskEngine};
use super::intake::IntakeValidator;

/// Router exposing the risk analysis endpoint backed by a shared engine.
pub fn analysis_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/risk-analysis", post(analysis_handler))
        .with_state(engine)
}

pub(crate) async fn analysis_handler(
    State(engine): State<Arc<RiskEngine>>,
    Json(submission): Json<SubjectSubmission>,
) -> Response {
    let current_year = current_year();

    match IntakeValidator::default().validate(submission, current_year) {
        Ok(subject) => {
            let profile = engine.evaluate_at(&subject, current_year);
            debug!(
                auto = %profile.auto,
                disability = %profile.disability,
                home = %profile.home,
                life = %profile.life,
                "risk profile evaluated"
            );
            (StatusCode::OK, Json(profile)).into_response()
        }
        Err(error) => {
            let fields: Vec<&str> = error.fields().collect();
            info!(?fields, "risk analysis submission rejected");
            let payload = json!({
                "error": error.to_string(),
                "fields": error.violations(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
