use std::io::Read;

use anyhow::{Context, Result};
use balm_core::types::OutputFormat;
use balm_core::{BalmError, ReflectionEntry};
use balm_insight::prompts;
use balm_insight::{Sentiment, sentiment, word_stats};
use rand::Rng;

pub(crate) fn handle_new(
    prompt_index: Option<usize>,
    response: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let prompt = match prompt_index {
        Some(index) => prompts::prompt_at(index)?,
        None => {
            let pick: usize = rand::thread_rng().gen_range(0..prompts::REFLECTION_PROMPTS.len());
            prompts::next_prompt(None, pick)
        }
    };

    let response = match response {
        Some(text) => text,
        None => {
            // Interactive path: show the prompt, then read until EOF.
            eprintln!("{prompt}");
            eprintln!("(write your reflection, then Ctrl-D)");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read reflection from stdin")?;
            buffer
        }
    };

    let response = response.trim().to_string();
    if response.is_empty() {
        return Err(BalmError::EmptyReflection.into());
    }

    let stats = word_stats(&response);
    let mood = sentiment(&response);

    let store = crate::journal::open_store()?;
    let entry = ReflectionEntry::new(prompt.to_string(), response);
    store.append_reflection(&entry)?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "entry": entry,
                    "word_stats": stats,
                    "sentiment": mood,
                }))?
            );
        }
        OutputFormat::Text => {
            println!("{}", entry.id);
            eprintln!(
                "Reflection saved ({} words, ~{} min read).",
                stats.words, stats.reading_minutes
            );
            if mood == Sentiment::Positive {
                eprintln!("Your reflection shows positive energy! ✨");
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_list(limit: usize, format: OutputFormat) -> Result<()> {
    let store = crate::journal::open_store()?;
    let mut reflections = store.load_reflections()?;
    reflections.truncate(limit);

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&reflections)?);
        return Ok(());
    }

    if reflections.is_empty() {
        eprintln!("No reflections yet. Start your first one with `balm reflect new`.");
        return Ok(());
    }

    for entry in &reflections {
        println!("{}", entry.timestamp.format("%Y-%m-%d"));
        println!("  {}", entry.prompt);
        println!("  {}", truncate_chars(&entry.response, 120));
        println!();
    }

    Ok(())
}

pub(crate) fn handle_search(pattern: &str, format: OutputFormat) -> Result<()> {
    let store = crate::journal::open_store()?;
    let matched = store.search_reflections(pattern)?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    eprintln!("Reflection search results ({} matches):", matched.len());
    for entry in &matched {
        println!("{}  {}", entry.timestamp.format("%Y-%m-%d"), entry.prompt);
        println!("  {}", truncate_chars(&entry.response, 120));
    }

    Ok(())
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
