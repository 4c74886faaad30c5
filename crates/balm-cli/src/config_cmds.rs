use anyhow::{Context, Result};
use balm_config::{BalmConfig, paths};

pub(crate) fn handle_init() -> Result<()> {
    let path = paths::config_file().context("could not resolve a config directory")?;

    if path.exists() {
        eprintln!("Config already exists: {}", path.display());
        return Ok(());
    }

    BalmConfig::default().save_to(&path)?;
    eprintln!("Wrote default config: {}", path.display());

    Ok(())
}

pub(crate) fn handle_show() -> Result<()> {
    let config = BalmConfig::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub(crate) fn handle_validate() -> Result<()> {
    let config = BalmConfig::load()?;
    config.validate()?;
    eprintln!("Config OK.");
    eprintln!("Journal dir: {}", config.journal_dir().display());
    Ok(())
}
