use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Direction of the recent mood trajectory, from average successive change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Improving => write!(f, "improving"),
            Self::Declining => write!(f, "declining"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

impl std::str::FromStr for Trend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "improving" => Ok(Self::Improving),
            "declining" => Ok(Self::Declining),
            "stable" => Ok(Self::Stable),
            _ => anyhow::bail!("Invalid trend: '{s}'. Valid: improving, declining, stable"),
        }
    }
}

/// Spread of the recent mood trajectory, from average absolute successive change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Volatility {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => anyhow::bail!("Invalid volatility: '{s}'. Valid: low, medium, high"),
        }
    }
}

/// Result of analyzing the recent check-in window.
///
/// Ephemeral: recomputed on each request, never persisted. A pure function
/// of the input entry list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub trend: Trend,
    pub volatility: Volatility,
    /// Most frequent factor tags in the window, at most 3, ties broken by
    /// first-encountered order.
    pub dominant_factors: Vec<String>,
    pub recommendation: &'static str,
}

/// Severity class of a derived pattern note, used to pick rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    Positive,
    Warning,
    Neutral,
    Info,
}

impl std::fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Warning => write!(f, "warning"),
            Self::Neutral => write!(f, "neutral"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// One bullet in the pattern list rendered alongside the recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternNote {
    pub category: PatternCategory,
    pub text: String,
}

/// Output format for CLI responses
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Human label for a mood level.
pub fn level_label(level: u8) -> &'static str {
    match level {
        1 => "Very Low",
        2 => "Low",
        3 => "Neutral",
        4 => "Good",
        5 => "Very Good",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_trend_roundtrip() {
        for trend in [Trend::Improving, Trend::Declining, Trend::Stable] {
            let s = trend.to_string();
            let parsed = Trend::from_str(&s).unwrap();
            assert_eq!(parsed, trend);
        }
    }

    #[test]
    fn test_trend_invalid() {
        let result = Trend::from_str("sideways");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid trend"));
    }

    #[test]
    fn test_volatility_roundtrip() {
        for volatility in [Volatility::Low, Volatility::Medium, Volatility::High] {
            let s = volatility.to_string();
            let parsed = Volatility::from_str(&s).unwrap();
            assert_eq!(parsed, volatility);
        }
    }

    #[test]
    fn test_volatility_invalid() {
        assert!(Volatility::from_str("extreme").is_err());
    }

    #[test]
    fn test_trend_serde_lowercase() {
        let json = serde_json::to_string(&Trend::Improving).unwrap();
        assert_eq!(json, "\"improving\"");
        let back: Trend = serde_json::from_str("\"declining\"").unwrap();
        assert_eq!(back, Trend::Declining);
    }

    #[test]
    fn test_level_label() {
        assert_eq!(level_label(1), "Very Low");
        assert_eq!(level_label(5), "Very Good");
        assert_eq!(level_label(0), "?");
        assert_eq!(level_label(42), "?");
    }
}
