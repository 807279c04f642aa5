use std::{fmt::Debug, sync::Arc};

use crate::PinFuture;
use derive_more::Deref;

/// Shared handle on a storage backend
#[derive(Clone, Debug, Deref)]
#[deref(forward)]
pub struct StorageBox(Arc<dyn Storage>);

impl StorageBox {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self(Arc::new(storage))
    }
}

/// String keyed document store, every value is a json encoded string
pub trait Storage: Debug + Send + Sync {
    // Get the value stored under `key`, `None` if the key was never set
    fn get(&self, key: String) -> PinFuture<eyre::Result<Option<String>>>;

    // Set (or overwrite) the value stored under `key`
    fn set(&self, key: String, value: String) -> PinFuture<eyre::Result<()>>;

    // Remove a key, removing a missing key is not an error
    fn remove(&self, key: String) -> PinFuture<eyre::Result<()>>;
}
