use anyhow::Result;
use clap::Parser;

mod breathe_cmd;
mod cli;
mod config_cmds;
mod insight_cmd;
mod journal;
mod maintenance_cmds;
mod mood_cmd;
mod reflect_cmd;

use cli::{Cli, Commands, ConfigCommands, MoodCommands, ReflectCommands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (output to stderr, initialize only once)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let output_format = cli.format.clone();

    match cli.command {
        Commands::Mood { cmd } => match cmd {
            MoodCommands::Add {
                level,
                factors,
                notes,
            } => {
                mood_cmd::handle_add(level, factors, notes, output_format)?;
            }
            MoodCommands::Quick { level } => {
                mood_cmd::handle_quick(level, output_format)?;
            }
            MoodCommands::List {
                since,
                factor,
                limit,
            } => {
                mood_cmd::handle_list(since, factor, limit, output_format)?;
            }
        },
        Commands::Reflect { cmd } => match cmd {
            ReflectCommands::New {
                prompt_index,
                response,
            } => {
                reflect_cmd::handle_new(prompt_index, response, output_format)?;
            }
            ReflectCommands::List { limit } => {
                reflect_cmd::handle_list(limit, output_format)?;
            }
            ReflectCommands::Search { pattern } => {
                reflect_cmd::handle_search(&pattern, output_format)?;
            }
        },
        Commands::Insight => {
            insight_cmd::handle_insight(output_format)?;
        }
        Commands::Stats => {
            insight_cmd::handle_stats(output_format)?;
        }
        Commands::Breathe { cycles } => {
            breathe_cmd::handle_breathe(cycles).await?;
        }
        Commands::Walk { minutes } => {
            breathe_cmd::handle_walk(minutes).await?;
        }
        Commands::Purge { before, dry_run } => {
            maintenance_cmds::handle_purge(&before, dry_run)?;
        }
        Commands::Export { output } => {
            maintenance_cmds::handle_export(output)?;
        }
        Commands::Init => {
            config_cmds::handle_init()?;
        }
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config_cmds::handle_show()?,
            ConfigCommands::Validate => config_cmds::handle_validate()?,
        },
    }

    Ok(())
}
