use std::path::PathBuf;

use anyhow::{Context, Result};

pub(crate) fn handle_purge(before: &str, dry_run: bool) -> Result<()> {
    let cutoff = crate::journal::parse_date(before)?;
    let store = crate::journal::open_store()?;

    let moods = store.load_moods()?;
    let reflections = store.load_reflections()?;

    let keep_moods: Vec<_> = moods
        .iter()
        .filter(|m| m.timestamp >= cutoff)
        .cloned()
        .collect();
    let keep_reflections: Vec<_> = reflections
        .iter()
        .filter(|r| r.timestamp >= cutoff)
        .cloned()
        .collect();

    let dropped =
        (moods.len() - keep_moods.len()) + (reflections.len() - keep_reflections.len());

    if dry_run {
        eprintln!("Would delete {dropped} entries older than {before}.");
        return Ok(());
    }

    store.rewrite_moods(&keep_moods)?;
    store.rewrite_reflections(&keep_reflections)?;
    eprintln!("Deleted {dropped} entries older than {before}.");

    Ok(())
}

pub(crate) fn handle_export(output: Option<PathBuf>) -> Result<()> {
    let store = crate::journal::open_store()?;
    let doc = store.export()?;
    let json = serde_json::to_string_pretty(&doc)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write export: {}", path.display()))?;
            eprintln!("Exported journal to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
