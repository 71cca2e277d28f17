use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Orrery fictional calendar engine.
#[derive(Parser)]
#[command(
    name = "orrery",
    version,
    about = "Fictional calendar arithmetic, moons, daylight and weather"
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
    /// Describe the instant at a timestamp.
    Inspect(InspectArgs),
    /// Convert a calendar date to a timestamp.
    Timestamp(TimestampArgs),
    /// Print a date-seeded weather forecast.
    Forecast(ForecastArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to TOML calendar configuration.
    #[arg(short, long, default_value = "orrery.toml")]
    pub config: PathBuf,

    /// Seconds since the epoch.
    #[arg(short, long, allow_hyphen_values = true)]
    pub time: i64,

    /// Climate zone id for daylight and weather.
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Weather seed; defaults to a seed derived from the date.
    #[arg(short, long)]
    pub seed: Option<u32>,
}

/// Arguments for the `timestamp` subcommand.
#[derive(clap::Args)]
pub struct TimestampArgs {
    /// Path to TOML calendar configuration.
    #[arg(short, long, default_value = "orrery.toml")]
    pub config: PathBuf,

    /// Display year.
    #[arg(long, allow_hyphen_values = true)]
    pub year: i64,

    /// 1-based month.
    #[arg(long)]
    pub month: usize,

    /// 1-based day of month.
    #[arg(long)]
    pub day: u32,

    #[arg(long, default_value_t = 0)]
    pub hour: u32,

    #[arg(long, default_value_t = 0)]
    pub minute: u32,

    #[arg(long, default_value_t = 0)]
    pub second: u32,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML calendar configuration.
    #[arg(short, long, default_value = "orrery.toml")]
    pub config: PathBuf,

    /// Seconds since the epoch of the first day.
    #[arg(short, long, allow_hyphen_values = true)]
    pub time: i64,

    /// Number of days.
    #[arg(short, long, default_value_t = 7)]
    pub days: usize,

    /// Climate zone id.
    #[arg(short, long)]
    pub zone: Option<String>,
}
