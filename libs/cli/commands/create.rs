use clap::Args;
use smarttodo_core::{validation, Core};

use crate::utils::{
    command_error,
    display::{display_title, LogBuilder, LogType},
    displayable_id::DisplayableId,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Title of the checklist
    title: String,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    validation::validate_title(&command.title).map_err(command_error::Error::invalid_input)?;

    let store = core.checklists_mut();
    let checklist = store.create(&command.title);
    let all = store.checklists();

    LogBuilder::new(LogType::Success, "Checklist created")
        .with_branch(
            "ID",
            DisplayableId::among(&checklist.id, all.iter().map(|c| c.id.as_str())),
        )
        .with_branch("Title", display_title(&checklist.title))
        .print();

    Ok(())
}
