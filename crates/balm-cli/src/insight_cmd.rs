use anyhow::Result;
use balm_core::types::{OutputFormat, Trend};
use balm_config::BalmConfig;
use balm_insight::{
    WELCOME_CARD, analyze, average_level, daily_insight, derive_patterns, mood_streak,
    personalized_recommendations, sentiment,
};
use balm_store::JournalStore;
use chrono::{Local, Timelike, Utc};

pub(crate) fn handle_insight(format: OutputFormat) -> Result<()> {
    let config = BalmConfig::load()?;
    let store = JournalStore::new(config.journal_dir());
    let moods = store.load_moods()?;

    let analysis = analyze(&moods);
    let patterns = derive_patterns(analysis.as_ref());
    let cards = if moods.is_empty() {
        vec![WELCOME_CARD]
    } else {
        personalized_recommendations(analysis.as_ref())
    };

    if let OutputFormat::Json = format {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "analysis": analysis,
                "patterns": patterns,
                "recommendations": cards,
            }))?
        );
        return Ok(());
    }

    let now = Local::now();
    eprintln!("{}", greeting(now.hour(), config.profile.name.as_deref()));
    eprintln!();

    match &analysis {
        // Fewer than 2 check-ins is a normal state for a new journal, not an
        // error; fall back to the rotating daily line.
        None => {
            eprintln!("Not enough check-ins for a trend yet - two or more unlock analysis.");
            eprintln!("{}", daily_insight(now.date_naive()));
        }
        Some(analysis) => {
            println!("Trend:      {} {}", trend_icon(analysis.trend), analysis.trend);
            println!("Volatility: {}", analysis.volatility);
            if !analysis.dominant_factors.is_empty() {
                println!("Factors:    {}", analysis.dominant_factors.join(", "));
            }
            println!();
            println!("{}", analysis.recommendation);

            if !patterns.is_empty() {
                println!();
                for note in &patterns {
                    println!("  [{}] {}", note.category, note.text);
                }
            }
        }
    }

    println!();
    for card in &cards {
        println!("* {}", card.title);
        println!("  {}", card.detail);
    }

    Ok(())
}

pub(crate) fn handle_stats(format: OutputFormat) -> Result<()> {
    let config = BalmConfig::load()?;
    let store = JournalStore::new(config.journal_dir());
    let moods = store.load_moods()?;
    let reflections = store.load_reflections()?;

    let average = average_level(&moods);
    // Streak days follow the entries' UTC timestamps.
    let streak = mood_streak(&moods, Utc::now().date_naive());
    let positive_reflections = reflections
        .iter()
        .filter(|r| sentiment(&r.response) == balm_insight::Sentiment::Positive)
        .count();

    if let OutputFormat::Json = format {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "mood_entries": moods.len(),
                "reflections": reflections.len(),
                "average_level": average,
                "streak_days": streak,
                "positive_reflections": positive_reflections,
            }))?
        );
        return Ok(());
    }

    eprintln!(
        "{}",
        greeting(Local::now().hour(), config.profile.name.as_deref())
    );
    eprintln!();

    println!("Mood entries:         {}", moods.len());
    println!("Reflections:          {}", reflections.len());
    match average {
        Some(avg) => println!("Average mood:         {avg:.1}/5"),
        None => println!("Average mood:         -"),
    }
    if streak > 0 {
        println!("Check-in streak:      🔥 Day {streak} streak!");
    } else {
        println!("Check-in streak:      -");
    }
    println!("Positive reflections: {positive_reflections}");

    Ok(())
}

/// Time-of-day greeting; a configured name personalizes it.
fn greeting(hour: u32, name: Option<&str>) -> String {
    let (salutation, question) = if hour < 12 {
        ("Good morning", "How are you starting your day?")
    } else if hour < 17 {
        ("Good afternoon", "How is your day going?")
    } else {
        ("Good evening", "How are you feeling tonight?")
    };

    match name {
        Some(name) => format!("{salutation}, {name}! {question}"),
        None => format!("{salutation}! {question}"),
    }
}

fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Improving => "📈",
        Trend::Declining => "📉",
        Trend::Stable => "➡️",
    }
}
