//! Mood-trend classification and the derivations layered on top of it.
//!
//! Input lists arrive newest-first, the order the store returns them in.
//! Only the most recent [`ANALYSIS_WINDOW`] entries are considered, and of
//! those only `level` and `factors` matter.

use balm_core::types::{PatternCategory, PatternNote, Trend, TrendAnalysis, Volatility};
use balm_core::MoodEntry;

/// Number of most-recent entries the analyzer looks at.
pub const ANALYSIS_WINDOW: usize = 7;

const TREND_THRESHOLD: f64 = 0.3;
const VOLATILITY_HIGH: f64 = 1.5;
const VOLATILITY_MEDIUM: f64 = 0.8;
const MAX_DOMINANT_FACTORS: usize = 3;

/// Classify the recent mood trajectory.
///
/// Returns `None` when fewer than 2 entries exist; a single data point has
/// no trend, and callers treat the absence as a normal state rather than an
/// error. Levels outside 1-5 flow through arithmetically unchecked.
pub fn analyze(entries: &[MoodEntry]) -> Option<TrendAnalysis> {
    if entries.len() < 2 {
        return None;
    }

    let window = &entries[..entries.len().min(ANALYSIS_WINDOW)];

    // The window is newest-first; each adjacent pair is (newer, older), so
    // newer - older gives the oldest-to-newest slope sign.
    let diffs: Vec<f64> = window
        .windows(2)
        .map(|pair| f64::from(pair[0].level) - f64::from(pair[1].level))
        .collect();

    let avg_diff = diffs.iter().sum::<f64>() / diffs.len() as f64;
    let trend = if avg_diff > TREND_THRESHOLD {
        Trend::Improving
    } else if avg_diff < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    };

    let avg_change = diffs.iter().map(|d| d.abs()).sum::<f64>() / diffs.len() as f64;
    let volatility = if avg_change > VOLATILITY_HIGH {
        Volatility::High
    } else if avg_change > VOLATILITY_MEDIUM {
        Volatility::Medium
    } else {
        Volatility::Low
    };

    Some(TrendAnalysis {
        trend,
        volatility,
        dominant_factors: dominant_factors(window),
        recommendation: recommendation_for(trend, volatility),
    })
}

/// Tally factor tags across the window, descending by count.
///
/// Ties keep first-encountered window order: the tally list is built in
/// encounter order and sorted with a stable sort on count alone.
fn dominant_factors(window: &[MoodEntry]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for entry in window {
        for factor in &entry.factors {
            match counts.iter_mut().find(|(name, _)| *name == factor.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((factor.as_str(), 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_DOMINANT_FACTORS)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Fixed advisory table keyed by (trend, volatility). Static content.
fn recommendation_for(trend: Trend, volatility: Volatility) -> &'static str {
    match (trend, volatility) {
        (Trend::Improving, Volatility::Low) => {
            "🌟 You're on a great track! Keep up the positive momentum and consistency."
        }
        (Trend::Improving, Volatility::Medium) => {
            "📈 Good progress! Try to maintain regular self-care routines for stability."
        }
        (Trend::Improving, Volatility::High) => {
            "⚡ Positive trend with some ups and downs. Focus on building consistent habits."
        }
        (Trend::Declining, Volatility::Low) => {
            "🌱 Slight dip detected. Consider gentle self-care activities and reflection."
        }
        (Trend::Declining, Volatility::Medium) => {
            "💙 Mood declining. Try breathing exercises, reach out to someone, or engage in wellness activities."
        }
        (Trend::Declining, Volatility::High) => {
            "🆘 Concerning pattern detected. Consider professional support if this continues. You're not alone."
        }
        (Trend::Stable, Volatility::Low) => {
            "✨ Steady and stable - excellent emotional regulation! Keep up the great work."
        }
        (Trend::Stable, Volatility::Medium) => {
            "🎯 Generally stable with normal variation. You're managing well."
        }
        (Trend::Stable, Volatility::High) => {
            "🎢 Stable average but high volatility. Work on consistency with mood tracking and self-care."
        }
    }
}

/// Derive the short pattern list rendered under the recommendation.
///
/// Emission order is fixed: trend note (improving or declining, never both),
/// then high-volatility note, then leading-factor note. Stable trend and
/// low/medium volatility emit nothing.
pub fn derive_patterns(analysis: Option<&TrendAnalysis>) -> Vec<PatternNote> {
    let Some(analysis) = analysis else {
        return Vec::new();
    };

    let mut notes = Vec::new();

    match analysis.trend {
        Trend::Improving => notes.push(PatternNote {
            category: PatternCategory::Positive,
            text: "Your mood has been improving over time! Keep up the great work.".to_string(),
        }),
        Trend::Declining => notes.push(PatternNote {
            category: PatternCategory::Warning,
            text: "Recent mood trend shows some decline. Consider extra self-care.".to_string(),
        }),
        Trend::Stable => {}
    }

    if analysis.volatility == Volatility::High {
        notes.push(PatternNote {
            category: PatternCategory::Neutral,
            text: "Your mood shows high variability. Regular tracking helps identify triggers."
                .to_string(),
        });
    }

    if let Some(factor) = analysis.dominant_factors.first() {
        notes.push(PatternNote {
            category: PatternCategory::Info,
            text: format!("{factor} appears to influence your mood frequently."),
        });
    }

    notes
}

/// One advisory card in the recommendations list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RecommendationCard {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Shown instead of cards while the journal is still empty.
pub const WELCOME_CARD: RecommendationCard = RecommendationCard {
    title: "Welcome to balm!",
    detail: "Start by tracking your mood daily to unlock personalized insights and recommendations.",
};

const SELF_CARE_CARD: RecommendationCard = RecommendationCard {
    title: "Extra Self-Care",
    detail: "Your recent mood trend suggests focusing on self-care activities that bring you joy and comfort.",
};

const STABILITY_CARD: RecommendationCard = RecommendationCard {
    title: "Stability Focus",
    detail: "Try establishing regular routines for sleep, exercise, and relaxation to help stabilize your mood.",
};

const WORK_LIFE_CARD: RecommendationCard = RecommendationCard {
    title: "Work-Life Balance",
    detail: "Work seems to impact your mood frequently. Consider stress management techniques or talking to someone about work stress.",
};

const MORNING_ROUTINE_CARD: RecommendationCard = RecommendationCard {
    title: "Morning Routine",
    detail: "Start your day with 5 minutes of mindfulness or gratitude practice to set a positive tone.",
};

/// Build the personalized recommendation cards, at most 3.
///
/// The general morning-routine card always trails the targeted ones and is
/// the only card when no analysis is available yet.
pub fn personalized_recommendations(analysis: Option<&TrendAnalysis>) -> Vec<RecommendationCard> {
    let mut cards = Vec::new();

    if let Some(analysis) = analysis {
        if analysis.trend == Trend::Declining {
            cards.push(SELF_CARE_CARD);
        }
        if analysis.volatility == Volatility::High {
            cards.push(STABILITY_CARD);
        }
        if analysis.dominant_factors.iter().any(|f| f == "work") {
            cards.push(WORK_LIFE_CARD);
        }
    }

    cards.push(MORNING_ROUTINE_CARD);
    cards.truncate(3);
    cards
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ulid::Ulid;

    /// Newest-first fixture builder: `levels[0]` is the most recent entry.
    fn entries(levels: &[u8]) -> Vec<MoodEntry> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| entry_at(level, &[], i))
            .collect()
    }

    fn entry_at(level: u8, factors: &[&str], age_days: usize) -> MoodEntry {
        MoodEntry {
            id: Ulid::new(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
                - chrono::Duration::days(age_days as i64),
            level,
            factors: factors.iter().map(|f| (*f).to_string()).collect(),
            notes: None,
            quick: false,
        }
    }

    #[test]
    fn test_analyze_empty_is_none() {
        assert!(analyze(&[]).is_none());
    }

    #[test]
    fn test_analyze_single_entry_is_none() {
        assert!(analyze(&entries(&[3])).is_none());
    }

    #[test]
    fn test_linear_rise_is_improving_medium() {
        // Newest-first [5,4,3,2,1] reads oldest-to-newest as 1,2,3,4,5:
        // diffs all +1.0, so the trend is improving and the average absolute
        // change of 1.0 lands in the medium volatility band (>0.8, <=1.5).
        let analysis = analyze(&entries(&[5, 4, 3, 2, 1])).unwrap();
        assert_eq!(analysis.trend, Trend::Improving);
        assert_eq!(analysis.volatility, Volatility::Medium);
    }

    #[test]
    fn test_linear_fall_is_declining() {
        let analysis = analyze(&entries(&[1, 2, 3, 4, 5])).unwrap();
        assert_eq!(analysis.trend, Trend::Declining);
    }

    #[test]
    fn test_constant_sequence_is_stable_low() {
        let analysis = analyze(&entries(&[3, 3, 3, 3, 3, 3, 3])).unwrap();
        assert_eq!(analysis.trend, Trend::Stable);
        assert_eq!(analysis.volatility, Volatility::Low);
    }

    #[test]
    fn test_alternating_extremes_is_high_volatility() {
        // Swings of 4 average out to a flat trend but maximal volatility.
        let analysis = analyze(&entries(&[1, 5, 1, 5, 1, 5, 1])).unwrap();
        assert_eq!(analysis.trend, Trend::Stable);
        assert_eq!(analysis.volatility, Volatility::High);
    }

    #[test]
    fn test_window_caps_at_seven_entries() {
        // First 7 entries are flat; the extreme tail beyond the window must
        // not leak into the result.
        let mut list = entries(&[3, 3, 3, 3, 3, 3, 3]);
        list.extend(entries(&[1, 5, 1]));
        let analysis = analyze(&list).unwrap();
        assert_eq!(analysis.trend, Trend::Stable);
        assert_eq!(analysis.volatility, Volatility::Low);
    }

    #[test]
    fn test_out_of_range_levels_flow_through() {
        // No range validation: 0 and 255 are accepted arithmetically.
        // Documented leniency, not a gap to fix here.
        let analysis = analyze(&entries(&[255, 0])).unwrap();
        assert_eq!(analysis.trend, Trend::Improving);
        assert_eq!(analysis.volatility, Volatility::High);
    }

    #[test]
    fn test_dominant_factor_tie_break_keeps_window_order() {
        let list = vec![
            entry_at(3, &["work", "sleep"], 0),
            entry_at(3, &["work"], 1),
            entry_at(3, &["sleep"], 2),
        ];
        let analysis = analyze(&list).unwrap();
        // work:2 and sleep:2 tie; "work" was encountered first.
        assert_eq!(analysis.dominant_factors, vec!["work", "sleep"]);
    }

    #[test]
    fn test_dominant_factors_capped_at_three() {
        let list = vec![
            entry_at(3, &["work", "sleep", "weather", "social"], 0),
            entry_at(3, &["work", "sleep", "weather"], 1),
            entry_at(3, &["work", "sleep"], 2),
            entry_at(3, &["work"], 3),
        ];
        let analysis = analyze(&list).unwrap();
        assert_eq!(analysis.dominant_factors, vec!["work", "sleep", "weather"]);
    }

    #[test]
    fn test_entries_without_factors_contribute_nothing() {
        let analysis = analyze(&entries(&[4, 3, 2])).unwrap();
        assert!(analysis.dominant_factors.is_empty());
    }

    #[test]
    fn test_recommendation_matches_trend_and_volatility_cell() {
        let analysis = analyze(&entries(&[3, 3, 3, 3, 3, 3, 3])).unwrap();
        assert_eq!(
            analysis.recommendation,
            "✨ Steady and stable - excellent emotional regulation! Keep up the great work."
        );

        let analysis = analyze(&entries(&[1, 5, 1, 5, 1, 5, 1])).unwrap();
        assert_eq!(
            analysis.recommendation,
            "🎢 Stable average but high volatility. Work on consistency with mood tracking and self-care."
        );
    }

    #[test]
    fn test_analyze_ignores_notes_timestamps_and_quick_flag() {
        let base = vec![entry_at(5, &["sleep"], 0), entry_at(2, &["sleep"], 1)];
        let mut noisy = base.clone();
        for (i, entry) in noisy.iter_mut().enumerate() {
            entry.id = Ulid::new();
            entry.notes = Some(format!("note {i}"));
            entry.timestamp = entry.timestamp + chrono::Duration::hours(7);
            entry.quick = !entry.quick;
        }
        assert_eq!(analyze(&base), analyze(&noisy));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let list = entries(&[4, 1, 5, 2, 3, 4, 2]);
        assert_eq!(analyze(&list), analyze(&list));
    }

    #[test]
    fn test_derive_patterns_none_is_empty() {
        assert!(derive_patterns(None).is_empty());
    }

    #[test]
    fn test_derive_patterns_quiet_analysis_is_empty() {
        // Stable trend, low volatility, no factors: nothing to report.
        let analysis = analyze(&entries(&[3, 3, 3])).unwrap();
        assert!(derive_patterns(Some(&analysis)).is_empty());
    }

    #[test]
    fn test_derive_patterns_order_and_categories() {
        let list = vec![
            entry_at(1, &["work"], 0),
            entry_at(5, &["work"], 1),
            entry_at(1, &[], 2),
            entry_at(5, &[], 3),
        ];
        // Declining overall (5,1,5,1 oldest-to-newest ends low), high swings.
        let analysis = analyze(&list).unwrap();
        assert_eq!(analysis.trend, Trend::Declining);
        assert_eq!(analysis.volatility, Volatility::High);

        let notes = derive_patterns(Some(&analysis));
        let categories: Vec<PatternCategory> = notes.iter().map(|n| n.category).collect();
        assert_eq!(
            categories,
            vec![
                PatternCategory::Warning,
                PatternCategory::Neutral,
                PatternCategory::Info
            ]
        );
        assert!(notes[2].text.starts_with("work "));
    }

    #[test]
    fn test_trend_notes_are_mutually_exclusive() {
        let analysis = analyze(&entries(&[5, 4, 3, 2, 1])).unwrap();
        let notes = derive_patterns(Some(&analysis));
        let trend_notes = notes
            .iter()
            .filter(|n| {
                matches!(
                    n.category,
                    PatternCategory::Positive | PatternCategory::Warning
                )
            })
            .count();
        assert_eq!(trend_notes, 1);
    }

    #[test]
    fn test_recommendations_without_analysis() {
        assert_eq!(
            personalized_recommendations(None),
            vec![MORNING_ROUTINE_CARD]
        );
    }

    #[test]
    fn test_recommendations_truncate_to_three() {
        let list = vec![
            entry_at(1, &["work"], 0),
            entry_at(5, &["work"], 1),
            entry_at(1, &[], 2),
            entry_at(5, &[], 3),
        ];
        let analysis = analyze(&list).unwrap();
        let cards = personalized_recommendations(Some(&analysis));
        // Declining + high volatility + "work" dominant fills all 3 slots;
        // the general card is squeezed out.
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], SELF_CARE_CARD);
        assert_eq!(cards[1], STABILITY_CARD);
        assert_eq!(cards[2], WORK_LIFE_CARD);
    }

    #[test]
    fn test_recommendations_general_card_trails() {
        let analysis = analyze(&entries(&[1, 2, 3, 4, 5])).unwrap();
        let cards = personalized_recommendations(Some(&analysis));
        assert_eq!(cards, vec![SELF_CARE_CARD, MORNING_ROUTINE_CARD]);
    }
}
