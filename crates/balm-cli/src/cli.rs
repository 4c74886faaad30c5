use std::path::PathBuf;

use balm_core::types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "balm")]
#[command(about = "balm: a local-first mental-wellness journal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record and browse mood check-ins
    Mood {
        #[command(subcommand)]
        cmd: MoodCommands,
    },

    /// Write and browse prompted reflections
    Reflect {
        #[command(subcommand)]
        cmd: ReflectCommands,
    },

    /// Analyze recent check-ins (trend, volatility, recommendations)
    Insight,

    /// Journal totals, average mood and check-in streak
    Stats,

    /// Guided breathing exercise
    Breathe {
        /// Inhale/exhale pairs (defaults to the configured count)
        #[arg(long)]
        cycles: Option<u32>,
    },

    /// Mindful-walk countdown timer
    Walk {
        /// Duration in minutes
        #[arg(long, default_value_t = 5)]
        minutes: u64,
    },

    /// Delete entries older than a cutoff date
    Purge {
        /// Keep entries on or after this date (YYYY-MM-DD)
        #[arg(long)]
        before: String,

        /// Report what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Export the whole journal as one JSON document
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default config file
    Init,

    /// Show/manage configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum MoodCommands {
    /// Full check-in with factors and notes
    Add {
        /// Mood level, 1 (very low) to 5 (very good)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: u8,

        /// Factor tag influencing this mood (repeatable)
        #[arg(short, long = "factor")]
        factors: Vec<String>,

        /// Free-text note
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// One-tap check-in, just the level
    Quick {
        /// Mood level, 1 (very low) to 5 (very good)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        level: u8,
    },

    /// List check-ins
    List {
        /// Only entries on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,

        /// Only entries tagged with this factor
        #[arg(long)]
        factor: Option<String>,

        /// Maximum rows
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

#[derive(Subcommand)]
pub enum ReflectCommands {
    /// Answer a reflection prompt; reads stdin when the response is omitted
    New {
        /// Use a specific prompt instead of a random one
        #[arg(long)]
        prompt_index: Option<usize>,

        /// The reflection text
        response: Option<String>,
    },

    /// List recent reflections
    List {
        /// Maximum entries shown
        #[arg(short = 'n', long, default_value_t = 5)]
        limit: usize,
    },

    /// Search reflections (case-insensitive regex over prompt and response)
    Search { pattern: String },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}
