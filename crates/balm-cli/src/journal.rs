use anyhow::{Context, Result};
use balm_config::BalmConfig;
use balm_store::JournalStore;
use chrono::{DateTime, NaiveDate, Utc};

/// Open the journal store at the configured (or default) location.
pub(crate) fn open_store() -> Result<JournalStore> {
    let config = BalmConfig::load()?;
    let dir = config.journal_dir();
    tracing::debug!(dir = %dir.display(), "opening journal store");
    Ok(JournalStore::new(dir))
}

/// Parse a `YYYY-MM-DD` argument into midnight UTC.
pub(crate) fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{raw}' (expected YYYY-MM-DD)"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("failed to build midnight datetime for '{raw}'"))?;
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc))
}
