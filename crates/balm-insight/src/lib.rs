//! Pure derivations over journal data: the mood-trend analyzer, pattern and
//! recommendation derivation, and the smaller presentation helpers (streak,
//! averages, sentiment, prompts).
//!
//! Everything here is stateless and side-effect-free. Time and randomness
//! are supplied by the caller, so identical inputs always produce identical
//! outputs.

pub mod analyzer;
pub mod prompts;
pub mod responses;
pub mod stats;

pub use analyzer::{
    ANALYSIS_WINDOW, RecommendationCard, WELCOME_CARD, analyze, derive_patterns,
    personalized_recommendations,
};
pub use responses::{CheckinResponse, checkin_response};
pub use stats::{Sentiment, WordStats, average_level, daily_insight, mood_streak, sentiment, word_stats};
