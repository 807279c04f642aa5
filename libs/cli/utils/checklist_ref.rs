use std::fmt;
use std::str::FromStr;

use colored::Colorize;
use smarttodo_core::{Checklist, ChecklistStore, ChecklistTask, Lookup};

use crate::utils::{command_error, displayable_id::DisplayableId, exit_code::ExitCode};

/// Represents a reference to a checklist or a task typed on the command line.
///
/// This can be an id (or the start of one) or a position using the `@`
/// prefix, as numbered by `list` and `show`: `@1` is the first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    /// A full id or a prefix of its short part, e.g. "01hq3v".
    Id(String),
    /// 1-based position in the displayed listing. Parsed from "@1", "@2", etc.
    Position(u32),
}

impl ItemRef {
    pub fn resolve_checklist(&self, store: &ChecklistStore) -> command_error::Result<Checklist> {
        let checklists = store.checklists();
        match self {
            ItemRef::Position(n) => Ok(at_position(checklists.as_slice(), *n, "checklist")?.clone()),
            ItemRef::Id(reference) => match store.find_by_prefix(reference) {
                Lookup::Single(checklist) => Ok(checklist.clone()),
                Lookup::Many(matches) => Err(ambiguous_error(
                    reference,
                    matches.iter().map(|c| (c.id.as_str(), c.title.as_str())),
                )),
                Lookup::NotFound => Err(not_found_error("Checklist", reference)),
            },
        }
    }

    pub fn resolve_task(
        &self,
        store: &ChecklistStore,
        checklist: &Checklist,
    ) -> command_error::Result<ChecklistTask> {
        match self {
            ItemRef::Position(n) => Ok(at_position(checklist.tasks.as_slice(), *n, "task")?.clone()),
            ItemRef::Id(reference) => match store.find_task_by_prefix(checklist, reference) {
                Lookup::Single(task) => Ok(task.clone()),
                Lookup::Many(matches) => Err(ambiguous_error(
                    reference,
                    matches.iter().map(|t| (t.id.as_str(), t.title.as_str())),
                )),
                Lookup::NotFound => Err(not_found_error("Task", reference)),
            },
        }
    }
}

fn at_position<'a, T>(items: &'a [T], n: u32, kind: &str) -> command_error::Result<&'a T> {
    let index = n.checked_sub(1).ok_or_else(|| {
        command_error::Error::with_code(
            ExitCode::NoInput,
            eyre::eyre!("Provided invalid reference @0, positions start at 1."),
        )
    })?;

    items.get(index as usize).ok_or_else(|| {
        command_error::Error::with_code(
            ExitCode::NoInput,
            eyre::eyre!("No {kind} at position @{n}, there are {} of them", items.len()),
        )
    })
}

fn ambiguous_error<'a>(
    reference: &str,
    matches: impl Iterator<Item = (&'a str, &'a str)> + Clone,
) -> command_error::Error {
    let ids: Vec<&str> = matches.clone().map(|(id, _)| id).collect();
    let mut error_message = format!(
        "{} The provided ID '{}' is ambiguous and matches multiple entries:\n",
        "✗".red().bold(),
        reference.yellow()
    );

    for (id, title) in matches {
        let display_id = DisplayableId::among(id, ids.iter().copied());
        error_message.push_str(&format!(
            "  - ID: {} | Title: '{}'\n",
            display_id.to_string().bold(),
            title.cyan()
        ));
    }
    error_message.push_str("\nPlease use a more specific ID.");

    command_error::Error::with_code(ExitCode::NoInput, eyre::eyre!(error_message))
}

fn not_found_error(kind: &str, reference: &str) -> command_error::Error {
    command_error::Error::with_code(
        ExitCode::NoInput,
        eyre::eyre!("{kind} with id '{reference}' was not found."),
    )
}

/// Allows printing the ItemRef in a user-friendly format.
impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Id(s) => write!(f, "{}", s),
            ItemRef::Position(n) => write!(f, "@{}", n),
        }
    }
}

impl FromStr for ItemRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(suffix) = s.strip_prefix('@') {
            return suffix.parse::<u32>().map(ItemRef::Position).map_err(|_| {
                format!(
                    "Invalid position reference: expected a number like '@2', but found '@{}'.",
                    suffix
                )
            });
        }

        if s.is_empty() {
            return Err("Invalid reference: expected an ID or a position like '@1'.".to_owned());
        }
        Ok(ItemRef::Id(s.to_string()))
    }
}
