use clap::{Args, Subcommand};
use colored::Colorize;
use smarttodo_core::{validation, Core, StoredUser};

use crate::utils::{
    command_error::{self, Error},
    display::{LogBuilder, LogType},
    exit_code::ExitCode,
    time::format_created_at,
};

#[derive(Args, Debug)]
pub struct AddCommand {
    /// What keeps you going
    text: String,
}

#[derive(Args, Debug)]
pub struct ListCommand {
    /// Show json output
    #[clap(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Operation {
    /// Write down a new motivation
    Add(AddCommand),
    /// Show your motivations, oldest first
    List(ListCommand),
}

#[derive(Args, Debug)]
pub struct Command {
    #[command(subcommand)]
    operation: Operation,
}

pub async fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let user = current_user(core)?;
    match command.operation {
        Operation::Add(o) => add(o, core, user).await,
        Operation::List(o) => list(o, core, user).await,
    }
}

fn current_user(core: &Core) -> command_error::Result<&StoredUser> {
    core.auth().current_user().ok_or_else(|| {
        Error::with_code(
            ExitCode::NoUser,
            eyre::eyre!("Motivations belong to an account, log in first"),
        )
    })
}

async fn add(command: AddCommand, core: &Core, user: &StoredUser) -> command_error::Result<()> {
    validation::validate_motivation(&command.text).map_err(Error::invalid_input)?;

    let motivation = core
        .auth()
        .add_motivation(&command.text, &user.email)
        .await?;

    LogBuilder::new(LogType::Success, "Motivation saved")
        .with_branch("Text", motivation.text.cyan())
        .print();
    Ok(())
}

async fn list(command: ListCommand, core: &Core, user: &StoredUser) -> command_error::Result<()> {
    let motivations = core.auth().motivations_for(&user.email).await;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&motivations)?);
        return Ok(());
    }

    if motivations.is_empty() {
        LogBuilder::new(LogType::Unchanged, "No motivations yet")
            .with_branch("Hint", "smarttodo motivation add <text>".dimmed())
            .print();
        return Ok(());
    }

    for motivation in motivations.iter() {
        println!("{} {}", "❝".yellow().bold(), motivation.text.cyan());
        println!("  {}", format_created_at(motivation.created_at)?.dimmed());
    }
    Ok(())
}
