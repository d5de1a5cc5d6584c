use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use countdown::solver::constants::{DEFAULT_TOP, NUMBER_COUNT};
use countdown::{ExpressionSolver, validate_goal, validate_numbers};

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

/// Countdown - Solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find every expression over six numbers that evaluates to a goal")]
#[command(version)]
pub struct CliArgs {
    /// Six source numbers followed by the goal, e.g. `1 1 4 7 15 50 522`
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// How many of the best results to print
    #[arg(short, long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: [i64; NUMBER_COUNT],
    pub goal: i64,
    pub top: usize,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Splits the positional values into source numbers and goal, then
    /// validates both
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let Some((&goal, numbers)) = args.values.split_last() else {
            bail!("Expected {} source numbers and a goal", NUMBER_COUNT);
        };

        let numbers = validate_numbers(numbers).context("Invalid source numbers")?;
        let goal = validate_goal(goal).context("Invalid goal")?;

        Ok(CliConfig {
            numbers,
            goal,
            top: args.top,
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
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Solving for {} with numbers {:?}",
        config.goal, config.numbers
    );

    let mut solver = ExpressionSolver::new();
    let started = Instant::now();
    let solution = solver.solve(config.numbers, config.goal);
    let elapsed = started.elapsed();

    println!(
        "Found {} results in {} ms, tried {} combinations.",
        solution.len(),
        elapsed.as_millis(),
        solution.combinations()
    );

    if solution.is_empty() {
        warn!("No matching expression found");
        return Ok(());
    }

    println!(
        "Top {} results (or less if there aren't as many)",
        config.top
    );
    for expr in solution.top(config.top) {
        println!("{}", expr);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[i64]) -> CliArgs {
        CliArgs {
            values: values.to_vec(),
            top: DEFAULT_TOP,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_config_splits_goal_from_numbers() {
        let config = CliConfig::from_args(args(&[1, 1, 4, 7, 15, 50, 522]));
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.numbers, [1, 1, 4, 7, 15, 50]);
            assert_eq!(config.goal, 522);
            assert_eq!(config.top, 20);
        }
    }

    #[test]
    fn test_config_rejects_bad_input() {
        assert!(CliConfig::from_args(args(&[])).is_err());
        assert!(CliConfig::from_args(args(&[1, 2, 3, 4, 5, 6])).is_err());
        assert!(CliConfig::from_args(args(&[1, 2, 3, 4, 5, 6, 7, 8])).is_err());
        assert!(CliConfig::from_args(args(&[1, 2, 3, 4, 5, 6, -7])).is_err());
        assert!(CliConfig::from_args(args(&[0, 2, 3, 4, 5, 6, 7])).is_err());
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed =
            CliArgs::try_parse_from(["countdown", "7", "3", "4", "5", "15", "75", "785", "-t", "5"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.values, vec![7, 3, 4, 5, 15, 75, 785]);
            assert_eq!(parsed.top, 5);
            assert!(matches!(parsed.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
