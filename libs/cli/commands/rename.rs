use clap::Args;
use smarttodo_core::{validation, Core};

use crate::utils::{
    checklist_ref::ItemRef,
    command_error,
    display::{display_title, LogBuilder, LogType},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Checklist id prefix or position (e.g. @1)
    checklist: ItemRef,

    /// New title of the checklist
    title: String,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    validation::validate_title(&command.title).map_err(command_error::Error::invalid_input)?;

    let store = core.checklists_mut();
    let previous = command.checklist.resolve_checklist(store)?;

    match store.rename_checklist(&previous.id, &command.title) {
        Some(renamed) if renamed.title == previous.title => {
            LogBuilder::new(LogType::Unchanged, "Checklist already has this title")
                .with_branch("Title", display_title(&renamed.title))
                .print();
        }
        Some(renamed) => {
            LogBuilder::new(LogType::Success, "Checklist renamed")
                .with_branch("Before", display_title(&previous.title))
                .with_branch("After", display_title(&renamed.title))
                .print();
        }
        None => {
            LogBuilder::new(LogType::Unchanged, "Checklist no longer exists")
                .with_branch("ID", previous.id)
                .print();
        }
    }

    Ok(())
}
