use serde::{de::DeserializeOwned, Serialize};
use smarttodo_storage::StorageBox;

/// Read and decode the json document stored under `key`, `None` if the key
/// was never set. A failing read or an undecodable document is an error.
pub async fn try_read_document<T: DeserializeOwned>(
    storage: &StorageBox,
    key: &str,
) -> eyre::Result<Option<T>> {
    let Some(raw) = storage.get(key.to_owned()).await? else {
        return Ok(None);
    };
    let document = serde_json::from_str(&raw)
        .map_err(|e| eyre::eyre!("malformed document under '{key}': {e}"))?;
    Ok(Some(document))
}

/// Same as [`try_read_document`] but failures are logged and yield `None`
pub async fn read_document<T: DeserializeOwned>(storage: &StorageBox, key: &str) -> Option<T> {
    match try_read_document(storage, key).await {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "couldn't read document, using default");
            None
        }
    }
}

pub async fn read_document_or_default<T: DeserializeOwned + Default>(
    storage: &StorageBox,
    key: &str,
) -> T {
    read_document(storage, key).await.unwrap_or_default()
}

pub async fn write_document<T: Serialize + ?Sized>(
    storage: &StorageBox,
    key: &str,
    document: &T,
) -> eyre::Result<()> {
    let serialized = serde_json::to_string(document)?;
    storage.set(key.to_owned(), serialized).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarttodo_storage::{storage::in_memory::InMemoryStorageConfig, StorageConfig};

    #[tokio::test]
    async fn test_missing_and_malformed_documents() -> eyre::Result<()> {
        let storage = InMemoryStorageConfig::default().try_into_storage()?;

        let missing: Option<Vec<u32>> = read_document(&storage, "key").await;
        assert!(missing.is_none());

        storage.set("key".into(), "{not json".into()).await?;
        let malformed: Vec<u32> = read_document_or_default(&storage, "key").await;
        assert!(malformed.is_empty());

        // valid json with the wrong shape is treated the same way
        storage.set("key".into(), r#"{"a":1}"#.into()).await?;
        let wrong_shape: Vec<u32> = read_document_or_default(&storage, "key").await;
        assert!(wrong_shape.is_empty());

        let strict: eyre::Result<Option<Vec<u32>>> = try_read_document(&storage, "key").await;
        assert!(strict.is_err());

        write_document(&storage, "key", &[1u32, 2, 3][..]).await?;
        let strict: Option<Vec<u32>> = try_read_document(&storage, "key").await?;
        assert_eq!(strict, Some(vec![1, 2, 3]));
        let written: Vec<u32> = read_document_or_default(&storage, "key").await;
        assert_eq!(written, vec![1, 2, 3]);
        Ok(())
    }
}
