use smarttodo_config::Config;
use smarttodo_storage::StorageBox;

use crate::{AuthStore, ChecklistStore, Core, WriteQueue};

/// Load the configuration at `config_path` and build the core on top of the
/// selected profile (or the default profile of the configuration).
///
/// A missing or unreadable configuration file falls back on the default
/// configuration, the reason is kept in [`Core::has_found_config_file`].
pub async fn load(config_path: &str, profile_name: Option<&str>) -> eyre::Result<Core> {
    let (config, found_config_file) = smarttodo_config::load_or_default(config_path);
    if let Err(e) = &found_config_file {
        tracing::debug!(config_path, error = %e, "using default configuration");
    }
    load_core(config, profile_name, found_config_file).await
}

async fn load_core(
    config: Config,
    profile_name: Option<&str>,
    found_config_file: Result<(), eyre::Error>,
) -> eyre::Result<Core> {
    let (profile_name, profile) = match profile_name {
        Some(name) => (name.to_owned(), config.get_profile(name)?),
        None => (
            config.core.get_default_profile_name(),
            config.get_current_profile()?,
        ),
    };
    let storage = smarttodo_storage::from_profile(profile)?;
    tracing::info!(profile = %profile_name, storage = ?storage, "storage ready");

    Ok(assemble(storage, config, profile_name, found_config_file).await)
}

/// Build a core directly on a storage, the default configuration is attached
pub async fn load_with_storage(storage: StorageBox) -> Core {
    let config = Config::default();
    let profile_name = config.core.get_default_profile_name();
    assemble(storage, config, profile_name, Ok(())).await
}

async fn assemble(
    storage: StorageBox,
    config: Config,
    profile_name: String,
    found_config_file: Result<(), eyre::Error>,
) -> Core {
    let writer = WriteQueue::spawn(storage.clone());
    let checklists = ChecklistStore::load(&storage, writer.clone()).await;
    let auth = AuthStore::load(storage).await;

    Core {
        checklists,
        auth,
        writer,
        config,
        profile_name,
        found_config_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &std::path::Path) -> String {
        let config_path = dir.join("config.toml");
        let data_path = dir.join("data");
        std::fs::write(
            &config_path,
            format!(
                r#"
                [core]
                default_profile_name = "disk"

                [profile.disk]
                storage_type = "file"
                storage_location = "{}"

                [profile.scratch]
                storage_type = "in_memory"
                "#,
                data_path.display()
            ),
        )
        .unwrap();
        config_path.to_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn test_checklists_survive_a_restart() -> eyre::Result<()> {
        let dir = tempdir()?;
        let config_path = write_config(dir.path());

        let mut core = load(&config_path, None).await?;
        assert!(core.has_found_config_file().is_ok());
        assert_eq!(core.profile_name(), "disk");
        let list = core.checklists_mut().create("Groceries");
        core.checklists_mut().add_task(&list.id, "Milk");
        core.auth_mut()
            .sign_up("Ada", "ada@example.com", "secret1")
            .await?;
        core.flush().await?;
        drop(core);

        let core = load(&config_path, None).await?;
        let checklists = core.checklists().checklists();
        assert_eq!(checklists.len(), 1);
        assert_eq!(checklists[0].title, "Groceries");
        assert_eq!(checklists[0].tasks[0].title, "Milk");
        assert_eq!(
            core.auth().current_user().map(|u| u.email.as_str()),
            Some("ada@example.com")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_select_profile_by_name() -> eyre::Result<()> {
        let dir = tempdir()?;
        let config_path = write_config(dir.path());

        let mut core = load(&config_path, Some("scratch")).await?;
        assert_eq!(core.profile_name(), "scratch");
        assert_eq!(
            core.profile().map(|p| p.storage_type),
            Some(smarttodo_config::StorageType::InMemory)
        );
        core.checklists_mut().create("Ephemeral");
        core.flush().await?;

        assert!(!dir.path().join("data").exists());
        assert!(load(&config_path, Some("missing")).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_with_storage() -> eyre::Result<()> {
        use smarttodo_storage::{storage::in_memory::InMemoryStorageConfig, StorageConfig};

        let storage = InMemoryStorageConfig::default().try_into_storage()?;
        let mut core = load_with_storage(storage.clone()).await;
        core.checklists_mut().create("Groceries");
        core.flush().await?;

        let reloaded = load_with_storage(storage).await;
        assert_eq!(reloaded.profile_name(), "default");
        assert_eq!(reloaded.checklists().checklists().len(), 1);
        assert!(!reloaded.auth().is_logged_in());
        Ok(())
    }
}
