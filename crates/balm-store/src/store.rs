use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use balm_core::{MoodEntry, ReflectionEntry};
use chrono::{DateTime, Utc};
use regex::RegexBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

const MOODS_FILE_NAME: &str = "moods.jsonl";
const REFLECTIONS_FILE_NAME: &str = "reflections.jsonl";
const LOCK_FILE_NAME: &str = ".lock";
const APP_NAME: &str = "balm";

/// Filters for listing mood entries.
#[derive(Debug, Clone, Default)]
pub struct MoodFilter {
    pub since: Option<DateTime<Utc>>,
    pub factor: Option<String>,
}

/// Append-only JSONL store for moods and reflections.
///
/// Writes are protected by an `flock` on `.lock` in the journal directory;
/// reads need no lock. Loads return entries newest-first.
#[derive(Debug, Clone)]
pub struct JournalStore {
    base_dir: PathBuf,
    moods_path: PathBuf,
    reflections_path: PathBuf,
}

impl JournalStore {
    pub fn new(base_dir: PathBuf) -> Self {
        let base_dir = if base_dir.as_os_str().is_empty() {
            default_journal_base_dir()
        } else {
            base_dir
        };
        Self {
            moods_path: base_dir.join(MOODS_FILE_NAME),
            reflections_path: base_dir.join(REFLECTIONS_FILE_NAME),
            base_dir,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    // -- Write operations (flock-protected) --------------------------------

    pub fn append_mood(&self, entry: &MoodEntry) -> Result<()> {
        self.with_write_lock(|| append_line(&self.moods_path, entry))
    }

    pub fn append_reflection(&self, entry: &ReflectionEntry) -> Result<()> {
        self.with_write_lock(|| append_line(&self.reflections_path, entry))
    }

    /// Replace the mood file contents atomically (retention/purge path).
    pub fn rewrite_moods(&self, entries: &[MoodEntry]) -> Result<()> {
        self.with_write_lock(|| rewrite_all(&self.base_dir, &self.moods_path, entries))
    }

    /// Replace the reflection file contents atomically (retention/purge path).
    pub fn rewrite_reflections(&self, entries: &[ReflectionEntry]) -> Result<()> {
        self.with_write_lock(|| rewrite_all(&self.base_dir, &self.reflections_path, entries))
    }

    // -- Read operations (no lock needed) ----------------------------------

    /// All mood entries, newest-first.
    pub fn load_moods(&self) -> Result<Vec<MoodEntry>> {
        let mut entries: Vec<MoodEntry> = load_lines(&self.moods_path)?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Mood entries matching `filter`, newest-first.
    pub fn list_moods(&self, filter: &MoodFilter) -> Result<Vec<MoodEntry>> {
        Ok(self
            .load_moods()?
            .into_iter()
            .filter(|entry| match filter.since {
                Some(since) => entry.timestamp >= since,
                None => true,
            })
            .filter(|entry| match &filter.factor {
                Some(factor) => entry.factors.iter().any(|f| f == factor),
                None => true,
            })
            .collect())
    }

    /// All reflection entries, newest-first.
    pub fn load_reflections(&self) -> Result<Vec<ReflectionEntry>> {
        let mut entries: Vec<ReflectionEntry> = load_lines(&self.reflections_path)?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Case-insensitive regex search over reflection prompts and responses.
    pub fn search_reflections(&self, pattern: &str) -> Result<Vec<ReflectionEntry>> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("invalid regex pattern: {pattern}"))?;

        Ok(self
            .load_reflections()?
            .into_iter()
            .filter(|entry| regex.is_match(&entry.prompt) || regex.is_match(&entry.response))
            .collect())
    }

    /// Everything in one JSON document, for export. Local-first data should
    /// always have a way out.
    pub fn export(&self) -> Result<serde_json::Value> {
        Ok(serde_json::json!({
            "moods": self.load_moods()?,
            "reflections": self.load_reflections()?,
        }))
    }

    // -- Internal helpers --------------------------------------------------

    /// Acquire a write lock on the journal directory, execute `f`, then release.
    fn with_write_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.ensure_storage_dir()?;

        let lock_path = self.base_dir.join(LOCK_FILE_NAME);
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open lock file: {}", lock_path.display()))?;
        let mut lock = fd_lock::RwLock::new(lock_file);
        let _guard = lock
            .write()
            .map_err(|e| anyhow::anyhow!("failed to acquire journal write lock: {e}"))?;

        f()
    }

    fn ensure_storage_dir(&self) -> Result<()> {
        let dir_exists = self.base_dir.exists();
        fs::create_dir_all(&self.base_dir).with_context(|| {
            format!("failed to create journal dir: {}", self.base_dir.display())
        })?;

        if !dir_exists {
            set_dir_mode_700(&self.base_dir)?;
        }

        Ok(())
    }
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new(PathBuf::new())
    }
}

fn append_line<T: Serialize>(path: &Path, entry: &T) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open journal file: {}", path.display()))?;

    set_file_mode_600(path)?;

    let line = serde_json::to_string(entry).context("failed to serialize journal entry")?;
    writeln!(file, "{line}").context("failed to append journal entry")?;
    file.flush().context("failed to flush journal append")?;

    Ok(())
}

fn load_lines<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .with_context(|| format!("failed to read journal file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.with_context(|| {
            format!(
                "failed to read journal line {} from {}",
                idx + 1,
                path.display()
            )
        })?;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    line_number = idx + 1,
                    %error,
                    "skipping corrupt journal jsonl line"
                );
            }
        }
    }

    Ok(entries)
}

fn rewrite_all<T: Serialize>(base_dir: &Path, target: &Path, entries: &[T]) -> Result<()> {
    let tmp = tempfile::NamedTempFile::new_in(base_dir)
        .with_context(|| format!("failed to create temp file in {}", base_dir.display()))?;

    {
        let mut writer = BufWriter::new(tmp.as_file());
        for entry in entries {
            let line = serde_json::to_string(entry).context("failed to serialize journal entry")?;
            writeln!(writer, "{line}").context("failed to write journal entry")?;
        }
        writer
            .flush()
            .context("failed to flush rewritten journal file")?;
    }

    tmp.persist(target)
        .with_context(|| format!("failed to persist to {}", target.display()))?;
    set_file_mode_600(target)?;

    Ok(())
}

/// Default journal directory under the XDG state dir, with a temp-dir
/// fallback for environments without a home.
pub fn default_journal_base_dir() -> PathBuf {
    if let Some(project_dirs) = directories::ProjectDirs::from("", "", APP_NAME) {
        return project_dirs
            .state_dir()
            .unwrap_or_else(|| project_dirs.data_local_dir())
            .join("journal");
    }

    if let Some(base_dirs) = directories::BaseDirs::new() {
        return base_dirs
            .home_dir()
            .join(".local")
            .join("state")
            .join(APP_NAME)
            .join("journal");
    }

    std::env::temp_dir()
        .join(format!("{APP_NAME}-state"))
        .join("journal")
}

#[cfg(unix)]
fn set_dir_mode_700(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o700))
        .with_context(|| format!("failed to chmod 700: {}", path.display()))
}

#[cfg(not(unix))]
fn set_dir_mode_700(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn set_file_mode_600(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .with_context(|| format!("failed to chmod 600: {}", path.display()))
}

#[cfg(not(unix))]
fn set_file_mode_600(_path: &Path) -> Result<()> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
