use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;

use crate::Config;

pub fn load(config_path: &str) -> eyre::Result<Config> {
    let content = read_file_content_if_exist(config_path)?
        .ok_or_else(|| eyre::eyre!("config path '{config_path}' was not found"))?;

    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Load the config file, fallback on the default config when it can't be read.
///
/// The second member is `Ok` when the file was found and parsed, otherwise it
/// holds the reason the default was used.
pub fn load_or_default(config_path: &str) -> (Config, Result<(), eyre::Error>) {
    match load(config_path) {
        Ok(config) => (config, Ok(())),
        Err(e) => (Config::default(), Err(e)),
    }
}

/// Path of the configuration file (default: "~/.config/smarttodo/config.toml")
pub fn default_config_path() -> eyre::Result<String> {
    let proj_dirs = ProjectDirs::from("", "", "smarttodo")
        .ok_or_else(|| eyre::eyre!("Project directories could not be found."))?;

    let config_path: PathBuf = proj_dirs.config_dir().join("config.toml");

    config_path
        .to_str()
        .map(|t| t.to_owned())
        .ok_or_else(|| eyre::eyre!("couldn't convert os path to string"))
}

fn read_file_content_if_exist(file_path: &str) -> eyre::Result<Option<String>> {
    let path = Path::new(file_path);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageType;
    use tempfile::tempdir;

    #[test]
    fn test_load() -> eyre::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [core]
            default_profile_name = "default"

            [profile.default]
            storage_type = "in_memory"
            "#,
        )?;

        let loaded = load(path.to_str().unwrap())?;
        assert_eq!(
            loaded.get_current_profile()?.storage_type,
            StorageType::InMemory
        );
        Ok(())
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let (config, found) = load_or_default(path.to_str().unwrap());
        assert!(found.is_err());
        assert!(config.get_current_profile().is_ok());
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[core\nbroken").unwrap();

        assert!(load(path.to_str().unwrap()).is_err());
    }
}
