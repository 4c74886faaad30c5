use std::path::PathBuf;

/// XDG app name used for config and state paths.
pub const APP_NAME: &str = "balm";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Config directory (`~/.config/balm` on Linux).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Full path of the config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// State directory (`~/.local/state/balm` on Linux).
pub fn state_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .to_path_buf()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_under_config_dir() {
        if let (Some(dir), Some(file)) = (config_dir(), config_file()) {
            assert!(file.starts_with(&dir));
            assert_eq!(file.file_name().unwrap(), CONFIG_FILE_NAME);
        }
    }
}
