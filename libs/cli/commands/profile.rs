use clap::Args;
use colored::Colorize;
use serde_derive::Serialize;
use smarttodo_config::StorageType;
use smarttodo_core::Core;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    exit_code::ExitCode,
};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ProfileOutput<'a> {
    name: &'a str,
    email: &'a str,
    checklists: usize,
    motivations: usize,
    config_profile: &'a str,
    storage: String,
}

#[derive(Args, Debug)]
pub struct Command {
    /// Show json output
    #[clap(long)]
    json: bool,
}

pub async fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let Some(user) = core.auth().current_user() else {
        return Err(command_error::Error::with_code(
            ExitCode::NoUser,
            eyre::eyre!("Nobody is logged in, use `smarttodo login` or `smarttodo signup`"),
        ));
    };

    let motivations = core.auth().motivations_for(&user.email).await.len();
    let checklists = core.checklists().checklists().len();
    let storage = storage_description(core);

    if command.json {
        let output = ProfileOutput {
            name: &user.name,
            email: &user.email,
            checklists,
            motivations,
            config_profile: core.profile_name(),
            storage,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    LogBuilder::new(LogType::Info, user.name.clone())
        .with_branch("Email", user.email.cyan())
        .with_branch("Lists", checklists)
        .with_branch("Notes", motivations)
        .with_branch("Profile", core.profile_name().to_owned())
        .with_branch("Storage", storage)
        .print();

    if let Err(reason) = core.has_found_config_file() {
        println!("  {}", format!("using the default configuration: {reason}").dimmed());
    }
    Ok(())
}

/// Where the data of the selected configuration profile lives
fn storage_description(core: &Core) -> String {
    match core.profile() {
        Some(profile) if profile.storage_type == StorageType::InMemory => "in memory".to_owned(),
        Some(profile) => profile.get_storage_location().display().to_string(),
        None => "unknown".to_owned(),
    }
}
