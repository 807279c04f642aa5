pub mod config;
pub mod load_config;

pub use config::{Config, CoreConfig, ProfileConfig, StorageType};
pub use load_config::{default_config_path, load, load_or_default};
