//! Summary figures for the stats view: streaks, averages, sentiment, and
//! the rotating daily insight line.

use balm_core::MoodEntry;
use chrono::{Datelike, NaiveDate};

const READING_WORDS_PER_MINUTE: usize = 200;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "grateful", "thankful", "excited", "love", "amazing",
];

const DAILY_INSIGHTS: &[&str] = &[
    "Your mental health journey is unique and valuable. Every step counts! 🌟",
    "Remember: It's okay to have difficult days. What matters is how you care for yourself. 💙",
    "Your feelings are valid. Acknowledge them without judgment and be kind to yourself. 🤗",
    "Progress isn't always linear. Celebrate the small victories along your wellness journey. 🎉",
    "You have the strength to handle whatever today brings. Trust in your resilience. 💪",
    "Taking time for reflection shows great self-awareness and courage. 🧘‍♀️",
    "Each mood entry is a gift to your future self. You're building valuable insights! 📊",
];

/// Consecutive days with at least one check-in, counted back from `today`.
///
/// Entries arrive newest-first. Any non-empty journal scores at least 1,
/// even when the run does not reach today; 0 means no entries at all.
pub fn mood_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let mut streak: u32 = 0;
    let mut expected = today;
    let mut counted: Option<NaiveDate> = None;

    for entry in entries {
        let day = entry.timestamp.date_naive();
        if counted == Some(day) {
            continue;
        }
        if day != expected {
            break;
        }
        streak += 1;
        counted = Some(day);
        expected = match expected.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }

    streak.max(1)
}

/// Mean mood level across all entries, or `None` for an empty journal.
pub fn average_level(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|e| u32::from(e.level)).sum();
    Some(f64::from(sum) / entries.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
}

/// Keyword-ratio sentiment scan over a reflection response.
///
/// Positive when more than 10% of whitespace-separated words match the
/// keyword set, case-insensitively. Punctuation glued to a word defeats the
/// match; that coarseness is inherited behavior, not worth a tokenizer.
pub fn sentiment(text: &str) -> Sentiment {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Sentiment::Neutral;
    }

    let positive = words
        .iter()
        .filter(|word| POSITIVE_WORDS.contains(&word.to_lowercase().as_str()))
        .count();

    if positive as f64 > words.len() as f64 * 0.1 {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WordStats {
    pub words: usize,
    pub reading_minutes: usize,
}

/// Word count and estimated reading time at 200 wpm, minimum one minute.
pub fn word_stats(text: &str) -> WordStats {
    let words = text.split_whitespace().count();
    WordStats {
        words,
        reading_minutes: words.div_ceil(READING_WORDS_PER_MINUTE).max(1),
    }
}

/// Rotating encouragement line, keyed by weekday so each day of the week
/// shows a stable message.
pub fn daily_insight(date: NaiveDate) -> &'static str {
    DAILY_INSIGHTS[date.weekday().num_days_from_sunday() as usize % DAILY_INSIGHTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ulid::Ulid;

    fn entry_on(year: i32, month: u32, day: u32, hour: u32) -> MoodEntry {
        MoodEntry {
            id: Ulid::new(),
            timestamp: Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap(),
            level: 3,
            factors: Vec::new(),
            notes: None,
            quick: false,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_streak_empty_journal() {
        assert_eq!(mood_streak(&[], date(2026, 8, 7)), 0);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let entries = vec![
            entry_on(2026, 8, 7, 9),
            entry_on(2026, 8, 6, 20),
            entry_on(2026, 8, 5, 8),
        ];
        assert_eq!(mood_streak(&entries, date(2026, 8, 7)), 3);
    }

    #[test]
    fn test_streak_multiple_entries_same_day_count_once() {
        let entries = vec![
            entry_on(2026, 8, 7, 21),
            entry_on(2026, 8, 7, 9),
            entry_on(2026, 8, 6, 12),
        ];
        assert_eq!(mood_streak(&entries, date(2026, 8, 7)), 2);
    }

    #[test]
    fn test_streak_breaks_on_gap() {
        let entries = vec![
            entry_on(2026, 8, 7, 9),
            entry_on(2026, 8, 5, 9),
            entry_on(2026, 8, 4, 9),
        ];
        assert_eq!(mood_streak(&entries, date(2026, 8, 7)), 1);
    }

    #[test]
    fn test_streak_floor_of_one_without_entry_today() {
        // Last check-in was days ago; a non-empty journal still reads as a
        // day-1 streak.
        let entries = vec![entry_on(2026, 8, 1, 9)];
        assert_eq!(mood_streak(&entries, date(2026, 8, 7)), 1);
    }

    #[test]
    fn test_average_level_empty() {
        assert!(average_level(&[]).is_none());
    }

    #[test]
    fn test_average_level() {
        let mut entries = vec![entry_on(2026, 8, 7, 9), entry_on(2026, 8, 6, 9)];
        entries[0].level = 5;
        entries[1].level = 2;
        assert_eq!(average_level(&entries), Some(3.5));
    }

    #[test]
    fn test_sentiment_positive() {
        // 2 keyword hits in 7 words clears the 10% bar.
        assert_eq!(
            sentiment("I am so happy and grateful today"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_sentiment_neutral() {
        assert_eq!(
            sentiment("the day was long and fairly ordinary"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_sentiment_empty_text_is_neutral() {
        assert_eq!(sentiment(""), Sentiment::Neutral);
        assert_eq!(sentiment("   "), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_is_case_insensitive() {
        assert_eq!(sentiment("GRATEFUL Happy LOVE you"), Sentiment::Positive);
    }

    #[test]
    fn test_word_stats_short_text() {
        let stats = word_stats("three short words");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.reading_minutes, 1);
    }

    #[test]
    fn test_word_stats_long_text() {
        let text = "word ".repeat(450);
        let stats = word_stats(&text);
        assert_eq!(stats.words, 450);
        assert_eq!(stats.reading_minutes, 3);
    }

    #[test]
    fn test_word_stats_empty() {
        let stats = word_stats("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.reading_minutes, 1);
    }

    #[test]
    fn test_daily_insight_is_stable_per_weekday() {
        // 2026-08-02 is a Sunday.
        let sunday = date(2026, 8, 2);
        assert_eq!(daily_insight(sunday), DAILY_INSIGHTS[0]);
        let monday = date(2026, 8, 3);
        assert_eq!(daily_insight(monday), DAILY_INSIGHTS[1]);
        // Same weekday a week later yields the same line.
        assert_eq!(daily_insight(date(2026, 8, 9)), DAILY_INSIGHTS[0]);
    }
}
