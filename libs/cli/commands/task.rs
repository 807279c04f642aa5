use clap::{Args, Subcommand};
use colored::Colorize;
use smarttodo_core::{validation, Core};

use crate::utils::{
    checklist_ref::ItemRef,
    command_error,
    display::{display_title, progress_summary, LogBuilder, LogType},
    displayable_id::DisplayableId,
};

#[derive(Args, Debug)]
pub struct AddCommand {
    /// Checklist id prefix or position (e.g. @1)
    checklist: ItemRef,
    /// Title of the task
    title: String,
}

#[derive(Args, Debug)]
pub struct TaskRefCommand {
    /// Checklist id prefix or position (e.g. @1)
    checklist: ItemRef,
    /// Task id prefix or position inside of the checklist (e.g. @2)
    task: ItemRef,
}

#[derive(Subcommand, Debug)]
enum Operation {
    /// Append a task to a checklist
    Add(AddCommand),
    /// Mark a task as done, or as not done if it already was
    Toggle(TaskRefCommand),
    /// Remove a task from a checklist
    Delete(TaskRefCommand),
}

#[derive(Args, Debug)]
pub struct Command {
    #[command(subcommand)]
    operation: Operation,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    match command.operation {
        Operation::Add(o) => add(o, core),
        Operation::Toggle(o) => toggle(o, core),
        Operation::Delete(o) => delete(o, core),
    }
}

fn add(command: AddCommand, core: &mut Core) -> command_error::Result<()> {
    validation::validate_title(&command.title).map_err(command_error::Error::invalid_input)?;

    let store = core.checklists_mut();
    let checklist = command.checklist.resolve_checklist(store)?;

    let Some(task) = store.add_task(&checklist.id, &command.title) else {
        LogBuilder::new(LogType::Unchanged, "Checklist no longer exists")
            .with_branch("ID", checklist.id)
            .print();
        return Ok(());
    };

    let updated = store.get(&checklist.id).cloned().unwrap_or(checklist);
    let ids: Vec<&str> = updated.tasks.iter().map(|t| t.id.as_str()).collect();
    LogBuilder::new(LogType::Success, "Task added")
        .with_branch("ID", DisplayableId::among(&task.id, ids))
        .with_branch("Task", task.title.cyan())
        .with_branch("Checklist", display_title(&updated.title))
        .with_branch("Progress", progress_summary(&updated))
        .print();
    Ok(())
}

fn toggle(command: TaskRefCommand, core: &mut Core) -> command_error::Result<()> {
    let store = core.checklists_mut();
    let checklist = command.checklist.resolve_checklist(store)?;
    let task = command.task.resolve_task(store, &checklist)?;

    match store.toggle_task(&checklist.id, &task.id) {
        Some(toggled) => {
            let (message, state) = if toggled.completed {
                ("Task completed", "done".green())
            } else {
                ("Task reopened", "to do".yellow())
            };
            let mut builder = LogBuilder::new(LogType::Success, message)
                .with_branch("Task", toggled.title.cyan())
                .with_branch("State", state);
            if let Some(updated) = store.get(&checklist.id) {
                builder = builder.with_branch("Progress", progress_summary(updated));
            }
            builder.print();
        }
        None => LogBuilder::new(LogType::Unchanged, "Task no longer exists")
            .with_branch("ID", task.id)
            .print(),
    }
    Ok(())
}

fn delete(command: TaskRefCommand, core: &mut Core) -> command_error::Result<()> {
    let store = core.checklists_mut();
    let checklist = command.checklist.resolve_checklist(store)?;
    let task = command.task.resolve_task(store, &checklist)?;

    match store.delete_task(&checklist.id, &task.id) {
        Some(removed) => LogBuilder::new(LogType::Removed, "Task deleted")
            .with_branch("Task", removed.title.cyan())
            .with_branch("Checklist", display_title(&checklist.title))
            .print(),
        None => LogBuilder::new(LogType::Unchanged, "Task no longer exists")
            .with_branch("ID", task.id)
            .print(),
    }
    Ok(())
}
