use smarttodo_storage::StorageBox;

use crate::{
    document::read_document_or_default, entities::checklist::Checklist, write_queue::WriteQueue,
};

pub const CHECKLISTS_KEY: &str = "@smarttodo_checklists_v1";

/// Load the whole checklist collection, any failure degrades to an empty collection
pub async fn load(storage: &StorageBox) -> Vec<Checklist> {
    read_document_or_default(storage, CHECKLISTS_KEY).await
}

/// Enqueue a write of the whole checklist collection.
///
/// Fire-and-forget: a collection that can't be encoded is logged and dropped,
/// storage failures are logged by the queue.
pub fn save(writer: &WriteQueue, checklists: &[Checklist]) {
    match serde_json::to_string(checklists) {
        Ok(document) => writer.enqueue_set(CHECKLISTS_KEY, document),
        Err(e) => tracing::warn!(error = %e, "couldn't encode checklists, dropping write"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::checklist::ChecklistTask;
    use smarttodo_storage::{storage::in_memory::InMemoryStorageConfig, StorageConfig};

    fn sample() -> Vec<Checklist> {
        vec![
            Checklist {
                id: "checklist-b".to_owned(),
                title: "Work".to_owned(),
                created_at: 2,
                tasks: vec![],
            },
            Checklist {
                id: "checklist-a".to_owned(),
                title: "Groceries".to_owned(),
                created_at: 1,
                tasks: vec![
                    ChecklistTask {
                        id: "task-1".to_owned(),
                        title: "Milk".to_owned(),
                        completed: true,
                        created_at: 10,
                    },
                    ChecklistTask {
                        id: "task-2".to_owned(),
                        title: "Eggs".to_owned(),
                        completed: false,
                        created_at: 11,
                    },
                ],
            },
        ]
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_everything() -> eyre::Result<()> {
        let storage = InMemoryStorageConfig::default().try_into_storage()?;
        let writer = WriteQueue::spawn(storage.clone());
        let checklists = sample();

        save(&writer, &checklists);
        writer.flush().await?;
        assert_eq!(load(&storage).await, checklists);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_key_is_empty() -> eyre::Result<()> {
        let storage = InMemoryStorageConfig::default().try_into_storage()?;
        assert!(load(&storage).await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_corrupt_or_non_array_document_is_empty() -> eyre::Result<()> {
        let storage = InMemoryStorageConfig::default().try_into_storage()?;

        storage.set(CHECKLISTS_KEY.into(), "[{\"id\":".into()).await?;
        assert!(load(&storage).await.is_empty());

        storage.set(CHECKLISTS_KEY.into(), "{\"id\":\"x\"}".into()).await?;
        assert!(load(&storage).await.is_empty());

        storage.set(CHECKLISTS_KEY.into(), "null".into()).await?;
        assert!(load(&storage).await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_reads_documents_written_by_the_mobile_app() -> eyre::Result<()> {
        let storage = InMemoryStorageConfig::default().try_into_storage()?;
        storage
            .set(
                CHECKLISTS_KEY.into(),
                r#"[{"id":"checklist-1700000000000","title":"Trip","createdAt":1700000000000,
                    "tasks":[{"id":"task-1700000000001-ab12c","title":"Passport","completed":false,"createdAt":1700000000001}]}]"#
                    .into(),
            )
            .await?;

        let checklists = load(&storage).await;
        assert_eq!(checklists.len(), 1);
        assert_eq!(checklists[0].title, "Trip");
        assert_eq!(checklists[0].tasks[0].id, "task-1700000000001-ab12c");
        Ok(())
    }
}
