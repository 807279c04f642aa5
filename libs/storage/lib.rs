use std::{future::Future, pin::Pin};

mod core {
    pub(crate) mod storage;
    pub(crate) mod storage_config;
}

pub use core::{
    storage::{Storage, StorageBox},
    storage_config::StorageConfig,
};

pub mod storage {
    pub mod file;
    pub mod in_memory;
}

pub mod utils {
    pub(crate) mod files;
}

use smarttodo_config::{ProfileConfig, StorageType};
use storage::{file::FileStorageConfig, in_memory::InMemoryStorageConfig};

pub type PinFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Build the storage backend selected by a configuration profile
pub fn from_profile(profile: &ProfileConfig) -> eyre::Result<StorageBox> {
    match profile.storage_type {
        StorageType::File => FileStorageConfig {
            storage_location: profile.get_storage_location(),
        }
        .try_into_storage(),
        StorageType::InMemory => InMemoryStorageConfig {}.try_into_storage(),
    }
}
