use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use clap::Parser;
use payoff_core::Strategy;
use payoff_data::logging::init_tracing;
use payoff_data::{HouseholdLoader, HouseholdReport, Settings};
use rust_decimal::Decimal;
use tracing::debug;

/// Compare avalanche and snowball debt payoff plans for a household.
///
/// The CSV file lists incomes, bills and debts; see the `payoff_data::loader`
/// docs for the column layout.
#[derive(Parser, Debug)]
#[command(name = "payoff-report")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the household CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Optional TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preferred strategy (avalanche or snowball)
    #[arg(short, long, value_parser = parse_strategy)]
    strategy: Option<Strategy>,

    /// Fixed extra monthly payment instead of the household's cashflow
    #[arg(short, long)]
    extra: Option<Decimal>,

    /// Comma-separated extra-payment bumps for the scenario table
    #[arg(short, long, value_delimiter = ',')]
    bumps: Option<Vec<Decimal>>,

    /// Reference date for payoff dates (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    today: Option<NaiveDate>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn parse_strategy(s: &str) -> Result<Strategy> {
    Strategy::parse(s)
        .ok_or_else(|| anyhow!("unknown strategy '{s}' (expected avalanche or snowball)"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        None => Settings::default(),
    };
    let settings = settings
        .with_overrides(args.strategy, args.extra, args.bumps)
        .context("Invalid command-line overrides")?;
    debug!(?settings, "settings resolved");

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;
    let household = HouseholdLoader::load(file)
        .with_context(|| format!("Failed to load household: {}", args.file.display()))?;

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let report = HouseholdReport::build(&household, &settings, today);

    println!("{report}");

    Ok(())
}
