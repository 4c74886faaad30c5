use anyhow::Result;
use balm_config::BalmConfig;
use balm_core::types::OutputFormat;
use balm_core::{MoodEntry, level_label};
use balm_insight::{CheckinResponse, checkin_response};
use balm_store::{JournalStore, MoodFilter};
use chrono::{DateTime, Utc};
use rand::Rng;

pub(crate) fn handle_add(
    level: u8,
    factors: Vec<String>,
    notes: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let config = BalmConfig::load()?;
    let store = JournalStore::new(config.journal_dir());

    // Free-form tags are accepted; the vocabulary is only a hint.
    for factor in &factors {
        if !config.journal.factor_vocabulary.iter().any(|f| f == factor) {
            tracing::debug!(%factor, "factor not in configured vocabulary");
        }
    }

    let entry = MoodEntry::new(level, factors, notes, false);
    store.append_mood(&entry)?;
    report_saved(&entry, format)
}

pub(crate) fn handle_quick(level: u8, format: OutputFormat) -> Result<()> {
    let store = crate::journal::open_store()?;
    let notes = format!("Quick mood check: {}", level_label(level).to_lowercase());
    let entry = MoodEntry::new(level, Vec::new(), Some(notes), true);
    store.append_mood(&entry)?;
    report_saved(&entry, format)
}

fn report_saved(entry: &MoodEntry, format: OutputFormat) -> Result<()> {
    let pick: usize = rand::thread_rng().gen_range(0..100);
    let response = checkin_response(entry.level, pick);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "entry": entry,
                    "response": response,
                }))?
            );
        }
        OutputFormat::Text => {
            println!("{}", entry.id);
            eprintln!("Mood entry saved! Thanks for checking in 💙");
            match response {
                CheckinResponse::Support {
                    title,
                    message,
                    actions,
                } => {
                    eprintln!("{title}");
                    eprintln!("{message}");
                    for action in actions {
                        eprintln!("  - {action}");
                    }
                }
                CheckinResponse::Suggestion { activity } => {
                    eprintln!("💡 Suggestion: {activity}");
                }
                CheckinResponse::Celebration { message } => {
                    eprintln!("{message}");
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_list(
    since: Option<String>,
    factor: Option<String>,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let since = since
        .map(|raw| crate::journal::parse_date(&raw))
        .transpose()?;

    let store = crate::journal::open_store()?;
    let filter = MoodFilter { since, factor };
    let mut moods = store.list_moods(&filter)?;
    moods.truncate(limit);

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&moods)?);
        return Ok(());
    }

    if moods.is_empty() {
        eprintln!("No mood entries found.");
        return Ok(());
    }

    // Table header
    println!(
        "{:<16}  {:<5}  {:<10}  {:<24}  NOTES",
        "TIMESTAMP", "LEVEL", "MOOD", "FACTORS"
    );

    for entry in &moods {
        println!(
            "{:<16}  {:<5}  {:<10}  {:<24}  {}",
            format_timestamp(entry.timestamp),
            entry.level,
            level_label(entry.level),
            truncate_chars(&entry.factors.join(","), 24),
            entry
                .notes
                .as_deref()
                .map(|n| truncate_chars(n, 40))
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    Ok(())
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 1, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2026-08-01 09:05");
    }

    #[test]
    fn test_truncate_chars_short_value_untouched() {
        assert_eq!(truncate_chars("work,sleep", 24), "work,sleep");
    }

    #[test]
    fn test_truncate_chars_appends_ellipsis() {
        assert_eq!(truncate_chars("abcdefgh", 5), "abcde...");
    }
}
