use super::storage::{Storage, StorageBox};

pub trait StorageConfig: Default {
    type Storage: Storage;

    fn try_into_storage(self) -> eyre::Result<StorageBox>;
}
