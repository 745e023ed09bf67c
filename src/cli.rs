use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ethio Gregorian-to-Ethiopian date converter.
#[derive(Parser)]
#[command(
    name = "ethio",
    version,
    about = "Convert Gregorian dates to the Ethiopian calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert an explicit Gregorian date.
    Convert(ConvertArgs),
    /// Convert the current local date.
    Today(TodayArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian year (results are guaranteed for 1900..=2099).
    pub year: i32,

    /// Gregorian month (1..=12).
    pub month: u8,

    /// Gregorian day of month.
    pub day: u8,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by all subcommands.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render the Amharic month name instead of the configured language.
    #[arg(long)]
    pub amharic: bool,

    /// Emit the structured result as pretty JSON.
    #[arg(long)]
    pub json: bool,

    /// Render shareable plain text with the configured prefix.
    #[arg(long, conflicts_with = "json")]
    pub share: bool,
}
