//! CLI argument definitions for the HeartCare client.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use heartcare_model::{PatientField, PatientInput};

#[derive(Parser)]
#[command(
    name = "heartcare-cli",
    version,
    about = "HeartCare - Heart attack risk assessment from the command line",
    long_about = "Query the HeartCare prediction backend.\n\n\
                  Shows dashboard statistics and feature importance, and runs\n\
                  risk assessments from flags or a JSON file."
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

    /// Allow patient values in trace logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Backend base URL (overrides HEARTCARE_API_URL).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds (overrides HEARTCARE_API_TIMEOUT).
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show aggregate prediction statistics.
    Stats,

    /// Show feature importance weights.
    ///
    /// Falls back to the built-in weights when the backend is unavailable.
    Importance,

    /// Show every dashboard chart as a table.
    Dashboard,

    /// Run a risk assessment for one patient.
    Predict(PredictArgs),
}

/// Patient values for `predict`. Flags override values read from `--input`.
#[derive(Args, Default)]
pub struct PredictArgs {
    /// JSON file with the thirteen fields (strings or numbers).
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print the backend response as JSON instead of a report.
    #[arg(long = "json")]
    pub json: bool,

    /// Age in years.
    #[arg(long)]
    pub age: Option<String>,
    /// Sex (1 = male, 0 = female).
    #[arg(long)]
    pub sex: Option<String>,
    /// Chest pain type (0-3).
    #[arg(long)]
    pub cp: Option<String>,
    /// Resting blood pressure in mm Hg.
    #[arg(long)]
    pub trtbps: Option<String>,
    /// Serum cholesterol in mg/dl.
    #[arg(long)]
    pub chol: Option<String>,
    /// Fasting blood sugar > 120 mg/dl (1 = yes, 0 = no).
    #[arg(long)]
    pub fbs: Option<String>,
    /// Resting ECG result (0-2).
    #[arg(long)]
    pub restecg: Option<String>,
    /// Maximum heart rate achieved.
    #[arg(long)]
    pub thalachh: Option<String>,
    /// Exercise induced angina (1 = yes, 0 = no).
    #[arg(long)]
    pub exng: Option<String>,
    /// ST depression induced by exercise.
    #[arg(long)]
    pub oldpeak: Option<String>,
    /// Slope of the peak exercise ST segment (0-2).
    #[arg(long)]
    pub slp: Option<String>,
    /// Number of major vessels (0-4).
    #[arg(long)]
    pub caa: Option<String>,
    /// Thalassemia (0-3).
    #[arg(long)]
    pub thall: Option<String>,
}

impl PredictArgs {
    /// The value given on the command line for `field`, if any.
    pub fn flag(&self, field: PatientField) -> Option<&str> {
        let value = match field {
            PatientField::Age => &self.age,
            PatientField::Sex => &self.sex,
            PatientField::Cp => &self.cp,
            PatientField::Trtbps => &self.trtbps,
            PatientField::Chol => &self.chol,
            PatientField::Fbs => &self.fbs,
            PatientField::Restecg => &self.restecg,
            PatientField::Thalachh => &self.thalachh,
            PatientField::Exng => &self.exng,
            PatientField::Oldpeak => &self.oldpeak,
            PatientField::Slp => &self.slp,
            PatientField::Caa => &self.caa,
            PatientField::Thall => &self.thall,
        };
        value.as_deref()
    }

    /// Lays the command-line values over `base`.
    pub fn apply_flags(&self, mut base: PatientInput) -> PatientInput {
        for field in PatientField::ALL {
            if let Some(value) = self.flag(field) {
                base.set(field, value);
            }
        }
        base
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
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_input() {
        let args = PredictArgs {
            age: Some("70".to_string()),
            ..PredictArgs::default()
        };
        let base = PatientInput::default()
            .with(PatientField::Age, "63")
            .with(PatientField::Sex, "1");

        let merged = args.apply_flags(base);

        assert_eq!(merged.age, "70");
        assert_eq!(merged.sex, "1");
    }

    #[test]
    fn test_predict_flags_parse() {
        let cli = Cli::try_parse_from([
            "heartcare-cli",
            "--api-url",
            "http://10.0.0.5:5000",
            "predict",
            "--age",
            "63",
            "--oldpeak",
            "2.3",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:5000"));
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.flag(PatientField::Age), Some("63"));
        assert_eq!(args.flag(PatientField::Oldpeak), Some("2.3"));
        assert_eq!(args.flag(PatientField::Sex), None);
    }
}
