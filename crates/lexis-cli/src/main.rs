//! lexis CLI entry point.
//!
//! Provides command-line tools for working with JSON locale files:
//! - `lexis check` - Validate locale files
//! - `lexis coverage` - Compare translations against a source locale
//! - `lexis eval` - Resolve a key the way an application would
//! - `lexis format` - Render numbers, prices and dates with a locale's formats

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_eval, run_format, CheckArgs, CoverageArgs, EvalArgs, FormatArgs,
};
use tracing::Level;
use tracing_subscriber::fmt;

/// lexis locale file tools.
#[derive(Debug, Parser)]
#[command(name = "lexis")]
#[command(about = "lexis locale file tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that locale files load
    Check(CheckArgs),
    /// Report translation coverage across locales
    Coverage(CoverageArgs),
    /// Resolve a translation key
    Eval(EvalArgs),
    /// Render a number, price or date
    Format(FormatArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn setup_logging(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::WARN };
    fmt()
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Eval(args) => run_eval(args),
        Commands::Format(args) => run_format(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
