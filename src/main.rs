//! NDLVC-5y risk score calculator.
//!
//! Main entry point: interactive terminal form by default, one-shot
//! scoring with `score`.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ndlvc_risk::adapters::{JsonReport, TextReport};
use ndlvc_risk::application::AssessmentService;
use ndlvc_risk::config::{default_filter, LogConfig};
use ndlvc_risk::domain::coefficient_table;
use ndlvc_risk::domain::BASELINE_SURVIVAL;
use ndlvc_risk::ports::ReportFormatter;
use ndlvc_risk::tui::App;
use ndlvc_risk::{RiskFactor, RiskFactors};

#[derive(Debug, Parser)]
#[command(
    name = "ndlvc-risk",
    version,
    about = "5-year risk of major arrhythmic events in non-dilated LV cardiomyopathy",
    long_about = "Computes the NDLVC-5y risk score from seven binary risk factors.\n\n\
        EXAMPLES:\n\
        \n  ndlvc-risk                              Interactive form\n\
        \n  ndlvc-risk score --minfl                Score one patient\n\
        \n  ndlvc-risk score --lvef-low --nsvt --format json\n\
        \n  ndlvc-risk model                        Print the model coefficients"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// Subcommand to run; the interactive form when none is given.
    fn subcommand(self) -> Command {
        self.command.unwrap_or(Command::Tui)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive risk-factor form (default)
    Tui,

    /// Score one set of risk factors and print a report
    Score(ScoreArgs),

    /// Print the model coefficients and baseline survival
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
struct ScoreArgs {
    /// Male sex
    #[arg(long)]
    male: bool,

    /// LVEF < 45%
    #[arg(long)]
    lvef_low: bool,

    /// Non-sustained ventricular tachycardia
    #[arg(long)]
    nsvt: bool,

    /// Septal late gadolinium enhancement
    #[arg(long)]
    septal_lge: bool,

    /// Ring-like pattern LGE
    #[arg(long)]
    ring_lge: bool,

    /// Pathogenic variant in a high-risk gene (LMNA, FLNC, TMEM43, PLN, DSP, RBM20)
    #[arg(long)]
    pvs_hr: bool,

    /// Myocardial inflammation (EMB or T2w CMR)
    #[arg(long)]
    minfl: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Omit the reference chart from text output
    #[arg(long)]
    no_chart: bool,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

impl ScoreArgs {
    fn factors(&self) -> RiskFactors {
        RiskFactors {
            male: self.male,
            lvef_low: self.lvef_low,
            nsvt: self.nsvt,
            septal_lge: self.septal_lge,
            ring_lge: self.ring_lge,
            pvs_hr: self.pvs_hr,
            minfl: self.minfl,
        }
    }

    fn formatter(&self) -> Box<dyn ReportFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextReport::new(!self.no_chart)),
            OutputFormat::Json => Box::new(JsonReport::new(self.compact)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    let command = cli.subcommand();

    // Writing logs to the terminal corrupts the TUI (alternate screen), and
    // stdout carries reports, so logs go to a file or stderr.
    let config = LogConfig::from_env()?;
    let interactive_ui = matches!(command, Command::Tui) && std::io::stdout().is_terminal();

    let (writer, _guard) = if config.use_file(interactive_ui) {
        if let Some(parent) = config.file.parent() {
            // Best-effort: a missing directory surfaces when opening the file.
            let _ = std::fs::create_dir_all(parent);
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file)
            .with_context(|| format!("Failed to open log file {}", config.file.display()))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stderr())
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    match command {
        Command::Tui => {
            tracing::info!("Starting interactive calculator");
            let mut app = App::new();
            app.run()?;
            tracing::info!("Calculator closed");
        }
        Command::Score(args) => {
            let formatter = args.formatter();
            let report = AssessmentService::new().report(args.factors(), formatter.as_ref())?;
            print!("{report}");
            if !report.ends_with('\n') {
                println!();
            }
        }
        Command::Model => print_model(),
    }

    Ok(())
}

fn print_model() {
    println!("NDLVC-5y prognostic model");
    println!("risk = 1 - S0 ^ exp(PI), S0 = {BASELINE_SURVIVAL}");
    println!();
    println!("{:<12} {:>11}  factor", "key", "coefficient");
    for (factor, coefficient) in coefficient_table() {
        println!("{:<12} {:>11.4}  {}", factor.key(), coefficient, factor.label());
    }
    let max: f64 = RiskFactor::ALL.iter().map(RiskFactor::coefficient).sum();
    println!("{:<12} {:>11.4}", "max PI", max);
}
