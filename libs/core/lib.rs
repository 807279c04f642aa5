use smarttodo_config::{Config, ProfileConfig};

pub mod auth_store;
pub mod checklist_storage;
pub mod checklist_store;
mod document;
pub mod entities;
mod load;
pub mod lookup;
pub mod quotes;
mod utils;
pub mod validation;
pub mod write_queue;

pub use auth_store::{AuthError, AuthStore};
pub use checklist_store::ChecklistStore;
pub use entities::{
    checklist::{Checklist, ChecklistTask},
    motivation::UserMotivation,
    user::StoredUser,
};
pub use load::{load, load_with_storage};
pub use lookup::Lookup;
pub use write_queue::WriteQueue;

pub struct Core {
    checklists: ChecklistStore,
    auth: AuthStore,
    writer: WriteQueue,
    config: Config,
    profile_name: String,
    /// Ok - found | Err - not found with error reason
    found_config_file: Result<(), eyre::Error>,
}

impl Core {
    pub fn checklists(&self) -> &ChecklistStore {
        &self.checklists
    }

    pub fn checklists_mut(&mut self) -> &mut ChecklistStore {
        &mut self.checklists
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthStore {
        &mut self.auth
    }

    /// Wait for every pending checklist write to reach the storage
    pub async fn flush(&self) -> eyre::Result<()> {
        self.writer.flush().await
    }

    /// Name of the configuration profile the storage was built from
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn profile(&self) -> Option<&ProfileConfig> {
        self.config.profile.get(&self.profile_name)
    }

    pub fn has_found_config_file(&self) -> &Result<(), eyre::Error> {
        &self.found_config_file
    }
}
