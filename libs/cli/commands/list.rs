use clap::Args;
use colored::Colorize;
use prettytable::{format, row, Table};
use smarttodo_core::{Checklist, Core};

use crate::utils::{
    command_error,
    display::{progress_bar, LogBuilder, LogType},
    displayable_id::DisplayableId,
    time::format_created_at,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Only show checklists whose title contains this text (case-insensitive)
    #[clap(short, long)]
    search: Option<String>,

    /// Show json output
    #[clap(long)]
    json: bool,
}

pub async fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let store = core.checklists();
    let all = store.checklists();
    let checklists: Vec<&Checklist> = match &command.search {
        Some(query) => store.search(query),
        None => all.iter().collect(),
    };

    if command.json {
        println!("{}", serde_json::to_string_pretty(&checklists)?);
        return Ok(());
    }

    if checklists.is_empty() {
        let message = match &command.search {
            Some(query) => format!("No checklist matches '{query}'"),
            None => "No checklists yet".to_owned(),
        };
        LogBuilder::new(LogType::Unchanged, message)
            .with_branch("Hint", "smarttodo create <title>".dimmed())
            .print();
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row![b->"#", b->"ID", b->"TITLE", b->"PROGRESS", b->"DONE", b->"CREATED"]);

    for checklist in checklists {
        // positions always refer to the unfiltered listing
        let position = all
            .iter()
            .position(|c| c.id == checklist.id)
            .map_or(0, |i| i + 1);
        let id = DisplayableId::among(&checklist.id, all.iter().map(|c| c.id.as_str()));
        let title = if checklist.title.is_empty() {
            "(untitled)".to_owned()
        } else {
            checklist.title.clone()
        };

        table.add_row(row![
            r->format!("@{position}"),
            Fy->id.plain(),
            Fc->title,
            Fg->progress_bar(checklist.progress(), 10),
            format!("{}/{} {}", checklist.completed_count(), checklist.total(), checklist.percentage_label()),
            format_created_at(checklist.created_at)?
        ]);
    }

    table.printstd();
    Ok(())
}
