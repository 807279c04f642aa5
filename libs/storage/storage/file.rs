use std::path::PathBuf;

use crate::{utils::files, PinFuture, Storage, StorageBox, StorageConfig};
use serde_derive::Deserialize;

/// Save every key as its own json document inside of a directory
#[derive(Debug)]
pub struct FileStorage {
    config: FileStorageConfig,
}

#[derive(Debug, Deserialize)]
pub struct FileStorageConfig {
    /// directory holding the documents, created on first write
    pub storage_location: PathBuf,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            storage_location: smarttodo_config::ProfileConfig::default().get_storage_location(),
        }
    }
}

impl StorageConfig for FileStorageConfig {
    type Storage = FileStorage;

    fn try_into_storage(self) -> eyre::Result<StorageBox> {
        if self.storage_location.exists() && !self.storage_location.is_dir() {
            return Err(eyre::eyre!(
                "Path {:?} is not a directory",
                self.storage_location
            ));
        }
        Ok(StorageBox::new(FileStorage::new(self)))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: String) -> PinFuture<eyre::Result<Option<String>>> {
        Box::pin(async move { files::read_file_if_exists(&self.document_path(&key)).await })
    }

    fn set(&self, key: String, value: String) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            files::create_dir_if_not_exists_deep(&self.config.storage_location).await?;
            files::save_file_atomically(&self.document_path(&key), &value).await
        })
    }

    fn remove(&self, key: String) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move { files::remove_file_if_exists(&self.document_path(&key)).await })
    }
}

impl FileStorage {
    pub fn new(config: FileStorageConfig) -> Self {
        FileStorage { config }
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.config
            .storage_location
            .join(format!("{}.json", document_name(key)))
    }
}

/// Map a storage key to a file name, e.g. `@smarttodo_checklists_v1` to
/// `smarttodo_checklists_v1`
fn document_name(key: &str) -> String {
    key.trim_start_matches('@')
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup_storage() -> (tempfile::TempDir, StorageBox) {
        let dir = tempdir().unwrap();
        let storage = FileStorageConfig {
            storage_location: dir.path().join("data"),
        }
        .try_into_storage()
        .unwrap();
        (dir, storage)
    }

    #[test]
    fn test_document_name() {
        assert_eq!(
            document_name("@smarttodo_checklists_v1"),
            "smarttodo_checklists_v1"
        );
        assert_eq!(document_name("a/b c"), "a_b_c");
    }

    #[tokio::test]
    async fn test_missing_key() -> eyre::Result<()> {
        let (_dir, storage) = setup_storage();
        assert_eq!(storage.get("@missing".into()).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_get_remove() -> eyre::Result<()> {
        let (dir, storage) = setup_storage();

        storage
            .set("@daily_motivation_user".into(), r#"{"a":1}"#.into())
            .await?;
        assert!(dir.path().join("data/daily_motivation_user.json").exists());
        assert_eq!(
            storage.get("@daily_motivation_user".into()).await?,
            Some(r#"{"a":1}"#.to_owned())
        );

        storage.remove("@daily_motivation_user".into()).await?;
        assert_eq!(storage.get("@daily_motivation_user".into()).await?, None);
        storage.remove("@daily_motivation_user".into()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_overwrite_keeps_last_value() -> eyre::Result<()> {
        let (dir, storage) = setup_storage();

        storage.set("key".into(), "1".into()).await?;
        storage.set("key".into(), "2".into()).await?;

        assert_eq!(storage.get("key".into()).await?, Some("2".to_owned()));
        assert!(!dir.path().join("data/key.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_rejects_file_as_location() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file");
        std::fs::write(&file_path, "").unwrap();

        let result = FileStorageConfig {
            storage_location: file_path,
        }
        .try_into_storage();
        assert!(result.is_err());
    }
}
