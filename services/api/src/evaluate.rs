use clap::Args;
use risk_profile::analysis::{
    current_year, IntakeValidator, RiskEngine, RiskProfile, SubjectSubmission,
};
use risk_profile::config::AppConfig;
use risk_profile::error::AppError;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Submission JSON file. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Year used for the vehicle age rules (defaults to the current year)
    #[arg(long)]
    pub(crate) current_year: Option<i32>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let engine = RiskEngine::new(config.underwriting);
    let year = args.current_year.unwrap_or_else(current_year);
    let profile = evaluate_submission(&engine, &raw, year)?;

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub(crate) fn evaluate_submission(
    engine: &RiskEngine,
    raw: &str,
    current_year: i32,
) -> Result<RiskProfile, AppError> {
    let submission: SubjectSubmission = serde_json::from_str(raw)?;
    let subject = IntakeValidator::default().validate(submission, current_year)?;
    Ok(engine.evaluate_at(&subject, current_year))
}
