//! Shared types for the balm journal: entry records, analysis values, and
//! the typed error enum used at the CLI boundary.

pub mod entry;
pub mod error;
pub mod types;

pub use entry::{MoodEntry, ReflectionEntry};
pub use error::BalmError;
pub use types::{
    OutputFormat, PatternCategory, PatternNote, Trend, TrendAnalysis, Volatility, level_label,
};
