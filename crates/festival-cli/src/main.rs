//! `festival` CLI: export and import program CSV files, plus time helpers.
//!
//! ## Usage
//!
//! ```sh
//! # Export session/location snapshots to festival-programm-2026-<today>.csv
//! festival export --sessions sessions.json --locations locations.json --out-dir exports/
//!
//! # Export to an explicit file
//! festival export --sessions sessions.json --locations locations.json -o program.csv
//!
//! # Import a platform CSV back into session JSON
//! festival import -i program.csv --locations locations.json
//!
//! # Time helpers
//! festival slots --interval 60 --start 08:00 --end 20:00
//! festival duration 10:00 11:30
//! festival add 23:30 60
//! festival timer 3665
//!
//! # Use substitute domain tables
//! festival --tables tables.json export --sessions sessions.json
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use festival_csv::export::{read_locations_json, read_sessions_json};
use festival_csv::{Location, ProgramTables};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "festival",
    version,
    about = "Festival program CSV export/import and time-slot helpers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with substitute domain tables (venue UUIDs, day labels, dates)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Enable debug logging (otherwise controlled by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export sessions to the platform's CSV format
    Export {
        /// Session snapshot (JSON array)
        #[arg(long)]
        sessions: PathBuf,
        /// Location snapshot (JSON array); without it no venue UUIDs are written
        #[arg(long)]
        locations: Option<PathBuf>,
        /// Directory for the dated export file
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Write to this file instead of the dated file name (overrides --out-dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a platform CSV file into session JSON
    Import {
        /// Input CSV file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Location snapshot used to resolve venues
        #[arg(long)]
        locations: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print evenly spaced time slots, one per line
    Slots {
        /// Step between slots in minutes
        #[arg(long, default_value_t = 30)]
        interval: i64,
        /// First slot (HH:MM)
        #[arg(long, default_value = "09:00")]
        start: String,
        /// Last possible slot (HH:MM)
        #[arg(long, default_value = "23:00")]
        end: String,
    },
    /// Print the minutes between two times
    Duration { start: String, end: String },
    /// Add minutes to a time, wrapping around midnight
    Add {
        time: String,
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Format seconds as MM:SS
    Timer { seconds: u64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let tables = load_tables(cli.tables.as_deref())?;

    match cli.command {
        Commands::Export {
            sessions,
            locations,
            out_dir,
            output,
        } => {
            let sessions = read_sessions_json(&sessions)
                .with_context(|| format!("Failed to load sessions: {}", sessions.display()))?;
            let locations = load_locations(locations.as_deref())?;

            let path = match output {
                Some(path) => {
                    let rendered = festival_csv::render_export(&sessions, &locations, &tables);
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write file: {}", path.display()))?;
                    path
                }
                None => festival_csv::write_export(
                    &out_dir,
                    &sessions,
                    &locations,
                    &tables,
                    Utc::now().date_naive(),
                )
                .with_context(|| format!("Failed to write export into {}", out_dir.display()))?,
            };
            println!("{}", path.display());
        }
        Commands::Import {
            input,
            locations,
            output,
        } => {
            let text = read_input(input.as_deref())?;
            let locations = load_locations(locations.as_deref())?;
            let sessions = festival_csv::decode_sessions(&text, &locations, &tables);
            tracing::debug!(count = sessions.len(), "imported sessions");

            let json = serde_json::to_string_pretty(&sessions)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Slots {
            interval,
            start,
            end,
        } => {
            let slots = festival_time::generate_time_slots(interval, &start, &end)
                .context("Failed to generate time slots")?;
            for slot in slots {
                println!("{}", slot);
            }
        }
        Commands::Duration { start, end } => {
            let minutes = festival_time::calculate_duration_in_minutes(
                Some(start.as_str()),
                Some(end.as_str()),
            )
            .context("Failed to compute duration")?;
            println!("{}", minutes);
        }
        Commands::Add { time, minutes } => {
            let result =
                festival_time::add_minutes(&time, minutes).context("Failed to add minutes")?;
            println!("{}", result);
        }
        Commands::Timer { seconds } => {
            println!("{}", festival_time::format_time(seconds));
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for piped JSON/CSV.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_tables(path: Option<&Path>) -> Result<ProgramTables> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            let tables = ProgramTables::from_json(&json)
                .with_context(|| format!("Invalid tables file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "using substitute domain tables");
            Ok(tables)
        }
        None => Ok(ProgramTables::builtin().clone()),
    }
}

fn load_locations(path: Option<&Path>) -> Result<Vec<Location>> {
    match path {
        Some(path) => read_locations_json(path)
            .with_context(|| format!("Failed to load locations: {}", path.display())),
        None => Ok(Vec::new()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
