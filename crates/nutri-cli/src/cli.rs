//! CLI argument definitions for NutriCare.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use nutri_model::{ChildId, Sex};
use nutri_report::DEFAULT_RECENT;

#[derive(Parser)]
#[command(
    name = "nutricare",
    version,
    about = "NutriCare - Acute malnutrition screening for children under five",
    long_about = "Classify children aged 0-60 months as SAM, MAM or NORMAL.\n\n\
                  Combines the WHO BMI-for-age z-score with the mid-upper arm\n\
                  circumference (MUAC) from 6 months, and keeps a measurement\n\
                  history per child."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Show the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Include child names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Store directory holding the registry and measurement logs.
    #[arg(long = "store-dir", value_name = "DIR", global = true)]
    pub store_dir: Option<PathBuf>,

    /// Directory holding the WHO BMI-for-age LMS tables.
    #[arg(long = "reference-dir", value_name = "DIR", global = true)]
    pub reference_dir: Option<PathBuf>,

    /// Classify by MUAC alone, ignoring any configured growth reference.
    #[arg(long = "no-reference", global = true, conflicts_with = "reference_dir")]
    pub no_reference: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a single measurement without saving it.
    Classify(ClassifyArgs),

    /// Register a child under a caregiver.
    Register(RegisterArgs),

    /// List registered children.
    Children(ChildrenArgs),

    /// Record and classify a measurement for a registered child.
    Measure(MeasureArgs),

    /// Show a child's recent history and latest status.
    Summary(SummaryArgs),

    /// Export a child's full history as CSV.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct BodyArgs {
    /// Weight in kilograms.
    #[arg(long = "weight", value_name = "KG")]
    pub weight_kg: f64,

    /// Height or length in centimetres.
    #[arg(long = "height", value_name = "CM")]
    pub height_cm: f64,

    /// Mid-upper arm circumference in millimetres (required from 6 months).
    #[arg(long = "muac", value_name = "MM")]
    pub muac_mm: Option<f64>,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Age in completed months (0-60).
    #[arg(long = "age-months", value_name = "MONTHS")]
    pub age_months: u32,

    #[arg(long = "sex", value_enum)]
    pub sex: SexArg,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Parser)]
pub struct RegisterArgs {
    /// Caregiver name; created on first use.
    #[arg(long = "caregiver")]
    pub caregiver: String,

    /// Child name.
    #[arg(long = "name")]
    pub name: String,

    /// Age in completed months at registration (0-60).
    #[arg(long = "age-months", value_name = "MONTHS")]
    pub age_months: u32,

    #[arg(long = "sex", value_enum)]
    pub sex: SexArg,
}

#[derive(Parser)]
pub struct ChildrenArgs {
    /// Only list this caregiver's children.
    #[arg(long = "caregiver")]
    pub caregiver: Option<String>,
}

#[derive(Parser)]
pub struct MeasureArgs {
    #[arg(value_name = "CHILD_ID")]
    pub child_id: ChildId,

    #[command(flatten)]
    pub body: BodyArgs,

    /// Age in months at this visit (default: derived from registration).
    #[arg(long = "age-months", value_name = "MONTHS")]
    pub age_months: Option<u32>,

    /// Require the child to belong to this caregiver.
    #[arg(long = "caregiver")]
    pub caregiver: Option<String>,
}

#[derive(Parser)]
pub struct SummaryArgs {
    #[arg(value_name = "CHILD_ID")]
    pub child_id: ChildId,

    /// Number of recent measurements to show.
    #[arg(
        long = "last",
        value_name = "N",
        default_value_t = DEFAULT_RECENT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub last: usize,

    /// Print the plain text summary instead of a table.
    #[arg(long = "plain")]
    pub plain: bool,

    /// Require the child to belong to this caregiver.
    #[arg(long = "caregiver")]
    pub caregiver: Option<String>,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[arg(value_name = "CHILD_ID")]
    pub child_id: ChildId,

    /// Output file (default: <child name>_nutricare.csv in the current directory).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Require the child to belong to this caregiver.
    #[arg(long = "caregiver")]
    pub caregiver: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SexArg {
    #[value(alias = "m", alias = "boy")]
    Male,
    #[value(alias = "f", alias = "girl")]
    Female,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_window_must_be_positive() {
        assert!(Cli::try_parse_from(["nutricare", "summary", "1", "--last", "0"]).is_err());

        let cli = Cli::try_parse_from(["nutricare", "summary", "1", "--last", "2"]).unwrap();
        match cli.command {
            Command::Summary(args) => assert_eq!(args.last, 2),
            _ => panic!("expected the summary command"),
        }
    }

    #[test]
    fn summary_window_defaults_to_recent() {
        let cli = Cli::try_parse_from(["nutricare", "summary", "1"]).unwrap();
        match cli.command {
            Command::Summary(args) => assert_eq!(args.last, DEFAULT_RECENT),
            _ => panic!("expected the summary command"),
        }
    }
}
