use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{PointsEngine, PointsOutcome, ReceiptSubmission, ReceiptValidator};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) path: PathBuf,
    /// Print the points earned by each rule
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.path)?;
    let outcome = score_receipt_json(&raw)?;
    print!("{}", render_outcome(&outcome, args.breakdown));
    Ok(())
}

pub(crate) fn score_receipt_json(raw: &str) -> Result<PointsOutcome, AppError> {
    let submission: ReceiptSubmission = serde_json::from_str(raw)?;
    let receipt = ReceiptValidator.validate(submission)?;
    Ok(PointsEngine::new().score(&receipt))
}

fn render_outcome(outcome: &PointsOutcome, breakdown: bool) -> String {
    let mut rendered = format!("Points: {}\n", outcome.total_points);
    if breakdown {
        for contribution in &outcome.contributions {
            let _ = writeln!(
                rendered,
                "- {}: {} ({})",
                contribution.rule.label(),
                contribution.points,
                contribution.notes
            );
        }
    }
    rendered
}
