use std::collections::HashMap;
use std::path::PathBuf;

use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_NAME: &str = "default";
pub const DEFAULT_STORAGE_LOCATION: &str = "~/.local/share/smarttodo";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub core: CoreConfig,
    #[serde(default)]
    pub profile: HashMap<String, ProfileConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CoreConfig {
    /// Profile used by default when none are specified
    pub default_profile_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// One json document per key inside of `storage_location`
    #[default]
    File,
    /// Nothing is written to disk, used for testing
    InMemory,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub storage_type: StorageType,

    /// Where the smarttodo documents will be located (default: ~/.local/share/smarttodo)
    pub storage_location: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut profile = HashMap::new();
        profile.insert(DEFAULT_PROFILE_NAME.to_owned(), ProfileConfig::default());

        Self {
            core: CoreConfig::default(),
            profile,
        }
    }
}

impl Config {
    /// Gets the current profile based on the `default_profile_name` in the core configuration.
    pub fn get_current_profile(&self) -> eyre::Result<&ProfileConfig> {
        let profile_name = self.core.get_default_profile_name();
        self.get_profile(&profile_name)
    }

    pub fn get_profile(&self, profile_name: &str) -> eyre::Result<&ProfileConfig> {
        self.profile
            .get(profile_name)
            .ok_or_else(|| eyre::eyre!("Profile '{profile_name}' not found in config"))
    }
}

impl ProfileConfig {
    /// Gets the storage location for this profile, `~` is expanded.
    pub fn get_storage_location(&self) -> PathBuf {
        let path_str = self
            .storage_location
            .as_deref()
            .unwrap_or(DEFAULT_STORAGE_LOCATION);
        let expanded_path = shellexpand::tilde(path_str);
        PathBuf::from(expanded_path.as_ref())
    }
}

impl CoreConfig {
    /// Return the default profile name is set or "default"
    pub fn get_default_profile_name(&self) -> String {
        self.default_profile_name
            .clone()
            .unwrap_or(DEFAULT_PROFILE_NAME.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profiles() -> eyre::Result<()> {
        let config: Config = toml::from_str(
            r#"
            [core]
            default_profile_name = "work"

            [profile.work]
            storage_type = "in_memory"

            [profile.home]
            storage_location = "/tmp/smarttodo-home"
            "#,
        )?;

        let current = config.get_current_profile()?;
        assert_eq!(current.storage_type, StorageType::InMemory);

        let home = config.get_profile("home")?;
        assert_eq!(home.storage_type, StorageType::File);
        assert_eq!(
            home.get_storage_location(),
            PathBuf::from("/tmp/smarttodo-home")
        );
        Ok(())
    }

    #[test]
    fn test_missing_profile() {
        let config: Config = toml::from_str(
            r#"
            [core]
            default_profile_name = "nope"
            "#,
        )
        .unwrap();

        assert!(config.get_current_profile().is_err());
    }

    #[test]
    fn test_default_config_has_default_profile() {
        let config = Config::default();
        let profile = config.get_current_profile().unwrap();
        assert_eq!(profile.storage_type, StorageType::File);
        assert!(profile.storage_location.is_none());
    }
}
