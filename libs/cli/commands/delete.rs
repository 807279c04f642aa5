use clap::Args;
use smarttodo_core::Core;

use crate::utils::{
    checklist_ref::ItemRef,
    command_error,
    display::{display_title, LogBuilder, LogType},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Checklist id prefix or position (e.g. @1)
    checklist: ItemRef,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    let store = core.checklists_mut();
    let checklist = command.checklist.resolve_checklist(store)?;

    match store.delete_checklist(&checklist.id) {
        Some(removed) => LogBuilder::new(LogType::Removed, "Checklist deleted")
            .with_branch("Title", display_title(&removed.title))
            .with_branch("Tasks", removed.total())
            .print(),
        None => LogBuilder::new(LogType::Unchanged, "Checklist no longer exists")
            .with_branch("ID", checklist.id)
            .print(),
    }

    Ok(())
}
