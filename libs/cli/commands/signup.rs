use clap::Args;
use colored::Colorize;
use smarttodo_core::{validation, AuthError, Core};

use crate::utils::{
    command_error::{self, Error},
    display::{LogBuilder, LogType},
    exit_code::ExitCode,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Display name (at most 50 characters)
    #[clap(short, long)]
    name: String,

    #[clap(short, long)]
    email: String,

    /// At least 6 characters
    #[clap(short, long)]
    password: String,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    validation::validate_name(&command.name).map_err(Error::invalid_input)?;
    validation::validate_email(&command.email).map_err(Error::invalid_input)?;
    validation::validate_password(&command.password).map_err(Error::invalid_input)?;

    let user = core
        .auth_mut()
        .sign_up(&command.name, &command.email, &command.password)
        .await
        .map_err(|e| match e {
            AuthError::DuplicateEmail => Error::with_code(ExitCode::DataError, e),
            e => Error::from(e),
        })?;

    LogBuilder::new(LogType::Success, format!("Welcome, {}!", user.name))
        .with_branch("Email", user.email.cyan())
        .print();
    Ok(())
}
