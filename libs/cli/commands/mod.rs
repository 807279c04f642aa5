use clap::Subcommand;
use smarttodo_core::Core;

use crate::utils::command_error;

pub mod create;
pub mod delete;
pub mod list;
pub mod login;
pub mod logout;
pub mod motivation;
pub mod profile;
pub mod quote;
pub mod rename;
pub mod show;
pub mod signup;
pub mod task;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List checklists with their progress, newest first
    List(list::Command),
    /// Display a checklist and its tasks
    Show(show::Command),
    /// Create a new empty checklist
    Create(create::Command),
    /// Change the title of a checklist
    Rename(rename::Command),
    /// Remove a checklist and all of its tasks
    Delete(delete::Command),
    /// Add, toggle or remove the tasks of a checklist
    Task(task::Command),
    /// Create a local account and log in
    Signup(signup::Command),
    /// Log in with an existing local account
    Login(login::Command),
    /// Log out of the current account
    Logout(logout::Command),
    /// Display the logged in user
    Profile(profile::Command),
    /// Write down or read your own motivations
    Motivation(motivation::Command),
    /// Print the quote of the day
    Quote(quote::Command),
}

impl Command {
    pub async fn execute(self, core: &mut Core) -> command_error::Result<()> {
        match self {
            Self::List(o) => list::handle(o, core).await?,
            Self::Show(o) => show::handle(o, core).await?,
            Self::Create(o) => create::handle(o, core).await?,
            Self::Rename(o) => rename::handle(o, core).await?,
            Self::Delete(o) => delete::handle(o, core).await?,
            Self::Task(o) => task::handle(o, core).await?,
            Self::Signup(o) => signup::handle(o, core).await?,
            Self::Login(o) => login::handle(o, core).await?,
            Self::Logout(o) => logout::handle(o, core).await?,
            Self::Profile(o) => profile::handle(o, core).await?,
            Self::Motivation(o) => motivation::handle(o, core).await?,
            Self::Quote(o) => quote::handle(o).await?,
        };

        Ok(())
    }
}
