use crate::{PinFuture, Storage, StorageBox, StorageConfig};
use dashmap::DashMap;
use serde_derive::Deserialize;

/// This storage type is used for testing, data is not persisted to disk but
/// only present in memory
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    documents: DashMap<String, String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InMemoryStorageConfig {}

impl StorageConfig for InMemoryStorageConfig {
    type Storage = InMemoryStorage;

    fn try_into_storage(self) -> eyre::Result<StorageBox> {
        Ok(StorageBox::new(InMemoryStorage::new()))
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: String) -> PinFuture<eyre::Result<Option<String>>> {
        Box::pin(async move { Ok(self.documents.get(&key).map(|v| v.value().clone())) })
    }

    fn set(&self, key: String, value: String) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            self.documents.insert(key, value);
            Ok(())
        })
    }

    fn remove(&self, key: String) -> PinFuture<eyre::Result<()>> {
        Box::pin(async move {
            self.documents.remove(&key);
            Ok(())
        })
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() -> eyre::Result<()> {
        let storage = InMemoryStorageConfig::default().try_into_storage()?;

        assert_eq!(storage.get("key".into()).await?, None);

        storage.set("key".into(), "[1,2]".into()).await?;
        assert_eq!(storage.get("key".into()).await?, Some("[1,2]".to_owned()));

        storage.set("key".into(), "[3]".into()).await?;
        assert_eq!(storage.get("key".into()).await?, Some("[3]".to_owned()));

        storage.remove("key".into()).await?;
        assert_eq!(storage.get("key".into()).await?, None);

        // removing twice is fine
        storage.remove("key".into()).await?;
        Ok(())
    }
}
