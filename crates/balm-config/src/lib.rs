//! Configuration for balm, stored as TOML under the XDG config directory
//! (`~/.config/balm/config.toml`). A missing file yields defaults; unknown
//! future fields are tolerated on read.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use balm_core::BalmError;
use serde::{Deserialize, Serialize};

pub mod paths;

/// Current schema version for config.toml
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalmConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub breathing: BreathingConfig,
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl Default for BalmConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            profile: ProfileConfig::default(),
            journal: JournalConfig::default(),
            breathing: BreathingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Name used in greetings. Optional; the greeting stays generic without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Override for the journal data directory; defaults to the XDG state dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Factor tags offered by the check-in form. Free-form tags are still
    /// accepted on entry.
    #[serde(default = "default_factor_vocabulary")]
    pub factor_vocabulary: Vec<String>,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            factor_vocabulary: default_factor_vocabulary(),
        }
    }
}

fn default_factor_vocabulary() -> Vec<String> {
    ["work", "sleep", "exercise", "social", "weather", "health"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingConfig {
    /// Inhale/exhale pairs per session.
    #[serde(default = "default_breathing_cycles")]
    pub cycles: u32,
    /// Seconds per half-cycle (one inhale or one exhale).
    #[serde(default = "default_breathing_phase_secs")]
    pub phase_secs: u64,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            cycles: default_breathing_cycles(),
            phase_secs: default_breathing_phase_secs(),
        }
    }
}

fn default_breathing_cycles() -> u32 {
    5
}

fn default_breathing_phase_secs() -> u64 {
    4
}

impl BalmConfig {
    /// Load from the default config path; absent file yields defaults.
    pub fn load() -> Result<Self> {
        match paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; absent file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Write to `path` atomically, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().context("config path has no parent")?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config dir: {}", parent.display()))?;

        let content = toml::to_string_pretty(self).context("failed to serialize config")?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("failed to create temp file in {}", parent.display()))?;
        std::io::Write::write_all(&mut tmp, content.as_bytes())
            .context("failed to write temp config")?;
        tmp.persist(path)
            .with_context(|| format!("failed to persist to {}", path.display()))?;

        Ok(())
    }

    /// Check invariants the rest of the app assumes.
    pub fn validate(&self) -> Result<()> {
        if self.breathing.cycles == 0 || self.breathing.phase_secs == 0 {
            return Err(BalmError::InvalidBreathingConfig.into());
        }

        if let Some(dir) = &self.journal.data_dir {
            std::fs::create_dir_all(dir)
                .map_err(|_| BalmError::DataDirNotWritable(dir.display().to_string()))?;
            let probe = dir.join(".balm-write-probe");
            std::fs::write(&probe, b"")
                .map_err(|_| BalmError::DataDirNotWritable(dir.display().to_string()))?;
            let _ = std::fs::remove_file(&probe);
        }

        Ok(())
    }

    /// Journal directory: the configured override, or the XDG default.
    pub fn journal_dir(&self) -> PathBuf {
        self.journal
            .data_dir
            .clone()
            .unwrap_or_else(balm_store_default)
    }
}

// The store crate owns the default layout; duplicate only the path logic to
// avoid a dependency cycle with balm-store.
fn balm_store_default() -> PathBuf {
    paths::state_dir()
        .map(|dir| dir.join("journal"))
        .unwrap_or_else(|| std::env::temp_dir().join("balm-state").join("journal"))
}
