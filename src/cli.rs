use crate::types::course::{parse_course_spec, CourseSpec};
use crate::types::scale::Scale;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cgpa",
    version,
    about = "Weighted CGPA calculator with heuristic target predictions"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the credit-weighted CGPA
    Calc(CalcCommand),
    /// Predict a future CGPA against a target
    Predict(PredictCommand),
    /// List grade symbols and points for each scale
    Scales(ScalesCommand),
    /// Edit a course list interactively on stdin
    Session(SessionCommand),
}

#[derive(Args)]
pub struct CourseInput {
    /// TOML course sheet
    #[arg(long)]
    pub sheet: Option<PathBuf>,

    /// Course as name:grade[:credits]; repeatable
    #[arg(short, long = "course", value_parser = parse_course_arg)]
    pub courses: Vec<CourseSpec>,

    #[arg(short, long, value_enum)]
    pub scale: Option<Scale>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CalcCommand {
    #[command(flatten)]
    pub input: CourseInput,
}

#[derive(Args)]
pub struct PredictCommand {
    #[command(flatten)]
    pub input: CourseInput,

    /// Target CGPA; overrides the sheet's target
    #[arg(short, long)]
    pub target: Option<String>,
}

#[derive(Args)]
pub struct ScalesCommand {
    #[arg(short, long, value_enum)]
    pub scale: Option<Scale>,
}

#[derive(Args)]
pub struct SessionCommand {
    #[arg(short, long, value_enum)]
    pub scale: Option<Scale>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_course_arg(raw: &str) -> Result<CourseSpec, String> {
    parse_course_spec(raw).map_err(|e| e.to_string())
}
