use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use dialoguer::{Confirm, Input};
use log::info;

use crate::output::{write_solutions, ConsoleProgress, SolutionWriter};
use crate::solver::constants::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use crate::solver::SizeBounds;

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

/// Nqueens - enumerate every solution to the N-Queen puzzle
#[derive(Parser, Debug)]
#[command(name = "nqueens")]
#[command(about = "Find all solutions to the N-Queen puzzle and save them as ASCII boards")]
#[command(version)]
pub struct CliArgs {
    /// Board size to solve; prompts interactively when omitted
    pub size: Option<usize>,

    /// Smallest accepted board size
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    pub min_size: usize,

    /// Largest accepted board size; solution files grow rapidly beyond the
    /// default
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,

    /// Directory where solution files are written
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let bounds = SizeBounds::new(args.min_size, args.max_size);

    if let Some(size) = args.size {
        bounds.validate(size)?;
        return solve_puzzle(size, &args.output_dir);
    }

    if !io::stdin().is_terminal() {
        bail!("No board size given and no terminal to prompt on; pass a size argument");
    }

    println!("-= Finds ALL solutions to the N-Queen Puzzle =-");
    println!("-= WARNING: large board sizes take a long time to process! =-");

    loop {
        let size = prompt_for_size(&bounds)?;
        solve_puzzle(size, &args.output_dir)?;

        let again = Confirm::new()
            .with_prompt("Solve another N-Queen Puzzle?")
            .default(true)
            .interact()
            .context("Failed to read answer")?;
        if !again {
            return Ok(());
        }
        println!();
    }
}

/// Prompt until the operator enters a size the bounds policy accepts.
fn prompt_for_size(bounds: &SizeBounds) -> Result<usize> {
    Input::<usize>::new()
        .with_prompt(format!("Enter a board size N ({} to {})", bounds.min, bounds.max))
        .validate_with(|n: &usize| bounds.validate(*n).map_err(|e| e.to_string()))
        .interact_text()
        .context("Failed to read board size")
}

/// Enumerate all solutions for one board size and write them to a file.
fn solve_puzzle(size: usize, output_dir: &Path) -> Result<()> {
    info!(
        "Enumerating all {}-queen solutions into {}",
        size,
        output_dir.display()
    );

    let (mut writer, path) = SolutionWriter::create_in(output_dir, size)
        .context("Cannot open the solution file")?;
    let mut progress = ConsoleProgress::for_board(size);

    println!("\nWorking");
    let total = write_solutions(size, &mut writer, &mut progress)
        .with_context(|| format!("Writing {}-queen solutions failed", size))?;

    println!("\n\n===== ALL {} SOLUTIONS FOUND! =====", total);
    println!("(See {} for results)", path.display());
    Ok(())
}
