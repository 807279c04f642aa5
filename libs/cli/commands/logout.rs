use clap::Args;
use smarttodo_core::Core;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
};

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, core: &mut Core) -> command_error::Result<()> {
    let Some(user) = core.auth().current_user().cloned() else {
        LogBuilder::new(LogType::Unchanged, "Nobody is logged in").print();
        return Ok(());
    };

    core.auth_mut().logout().await?;
    LogBuilder::new(LogType::Removed, "Logged out")
        .with_branch("Email", user.email)
        .print();
    Ok(())
}
