use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use digits_solver::solver::constants::DEFAULT_MAX_DIGITS;
use digits_solver::{DigitsSolver, SolverConfig, parse_digit_pool};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Digits Solver - Find every equation over a pool of numbers that hits a target
#[derive(Parser, Debug)]
#[command(name = "digits-solver")]
#[command(
    about = "Find arithmetic equations over a pool of numbers that evaluate to a target, with no negative or fractional steps"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers in the pool, separated by spaces or commas
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Target value to reach
    #[arg(short, long)]
    pub target: i64,

    /// Stop at the first equation found
    #[arg(long)]
    pub first: bool,

    /// Search on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Largest pool size accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DIGITS)]
    pub max_digits: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digits: Vec<i64>,
    pub target: i64,
    pub first: bool,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Validate and convert parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let digits = parse_digit_pool(&args.numbers.join(" ")).context("Invalid digit pool")?;

        Ok(CliConfig {
            digits,
            target: args.target,
            first: args.first,
            solver: SolverConfig {
                parallel: !args.sequential,
                max_digits: Some(args.max_digits),
                ..SolverConfig::default()
            },
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Write every equation on its own line followed by the total
pub fn write_solutions<W: Write>(out: &mut W, solutions: &[String]) -> io::Result<()> {
    for equation in solutions {
        writeln!(out, "{}", equation)?;
    }
    writeln!(out, "{} total solutions found.", solutions.len())
}

/// Write the single equation found by `--first`, or `No solution.`
pub fn write_first<W: Write>(out: &mut W, found: Option<&str>) -> io::Result<()> {
    match found {
        Some(equation) => writeln!(out, "{}", equation),
        None => writeln!(out, "No solution."),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let solver = DigitsSolver::with_config(config.solver);

    info!(
        "Searching for equations over {:?} that equal {}",
        config.digits, config.target
    );

    let mut stdout = io::stdout().lock();

    if config.first {
        let found = solver
            .find_first(&config.digits, config.target)
            .context("Search failed")?;
        if found.is_none() {
            warn!("No matching equation found");
        }
        write_first(&mut stdout, found.as_deref()).context("Failed to write output")?;
        return Ok(());
    }

    let solutions = solver
        .solve(&config.digits, config.target)
        .context("Search failed")?;

    if solutions.is_empty() {
        warn!("No matching equation found");
    }
    write_solutions(&mut stdout, &solutions).context("Failed to write output")?;
    Ok(())
}
