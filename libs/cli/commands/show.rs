use clap::Args;
use colored::Colorize;
use smarttodo_core::{Checklist, Core};

use crate::utils::{
    checklist_ref::ItemRef,
    command_error,
    display::{display_title, progress_summary, LogBuilder, LogType},
    displayable_id::DisplayableId,
    time::format_created_at,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Checklist id prefix or position (e.g. @1)
    checklist: ItemRef,

    /// Show json output
    #[clap(long)]
    json: bool,
}

pub async fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let checklist = command.checklist.resolve_checklist(core.checklists())?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&checklist)?);
        return Ok(());
    }

    print_checklist(&checklist)?;
    Ok(())
}

fn print_checklist(checklist: &Checklist) -> eyre::Result<()> {
    LogBuilder::new(LogType::Info, display_title(&checklist.title))
        .with_branch("ID", checklist.id.clone())
        .with_branch("Created", format_created_at(checklist.created_at)?)
        .with_branch("Progress", progress_summary(checklist))
        .print();

    if checklist.tasks.is_empty() {
        println!("\n  {}", "No tasks yet".dimmed());
        return Ok(());
    }

    println!();
    let ids: Vec<&str> = checklist.tasks.iter().map(|t| t.id.as_str()).collect();
    for (i, task) in checklist.tasks.iter().enumerate() {
        let (mark, title) = if task.completed {
            ("☑".green().bold(), task.title.dimmed().strikethrough())
        } else {
            ("☐".normal(), task.title.normal())
        };
        println!(
            "  {:>4} {} {}  {}",
            format!("@{}", i + 1).dimmed(),
            mark,
            title,
            DisplayableId::among(&task.id, ids.iter().copied())
        );
    }
    Ok(())
}
