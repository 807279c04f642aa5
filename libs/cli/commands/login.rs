use clap::Args;
use colored::Colorize;
use smarttodo_core::{AuthError, Core};

use crate::utils::{
    command_error::{self, Error},
    display::{LogBuilder, LogType},
    exit_code::ExitCode,
};

#[derive(Args, Debug)]
pub struct Command {
    #[clap(short, long)]
    email: String,

    #[clap(short, long)]
    password: String,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    if command.email.trim().is_empty() || command.password.is_empty() {
        return Err(Error::invalid_input(eyre::eyre!(
            "Please fill in all fields"
        )));
    }

    let user = core
        .auth_mut()
        .login(&command.email, &command.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => Error::with_code(ExitCode::NoUser, e),
            e => Error::from(e),
        })?;

    LogBuilder::new(LogType::Success, format!("Welcome back, {}!", user.name))
        .with_branch("Email", user.email.cyan())
        .print();
    Ok(())
}
