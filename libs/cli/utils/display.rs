use colored::*;
use smarttodo_core::Checklist;
use std::fmt::Display;

/// Defines the type of log message to determine the icon and color scheme.
pub enum LogType {
    Success,
    Info,
    /// Something was removed
    Removed,
    /// Nothing matched, nothing changed
    Unchanged,
}

/// A builder for creating structured, tree-like log messages.
pub struct LogBuilder<'a> {
    log_type: LogType,
    message: String,
    details: Vec<(&'a str, Box<dyn Display>)>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(log_type: LogType, message: impl Display) -> Self {
        Self {
            log_type,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    /// Adds a detail line (a "branch") to the log message.
    pub fn with_branch(mut self, label: &'a str, value: impl Display + 'static) -> Self {
        self.details.push((label, Box::new(value)));
        self
    }

    /// Consumes the builder and prints the formatted message to the console.
    pub fn print(self) {
        let (symbol, color) = match self.log_type {
            LogType::Success => ("✔", "green"),
            LogType::Info => ("ℹ", "blue"),
            LogType::Removed => ("✘", "red"),
            LogType::Unchanged => ("∅", "yellow"),
        };

        println!(
            "{} {}",
            symbol.color(color).bold(),
            self.message.color(color).bold()
        );

        let count = self.details.len();
        for (i, (label, value)) in self.details.iter().enumerate() {
            let prefix = if i == count - 1 { "  ╰─" } else { "  ├─" };
            let padded_label = format!("{label}:");
            println!("{} {:<9} {}", prefix.dimmed(), padded_label.bold(), value);
        }
    }
}

/// Fixed width text progress bar, e.g. `■■■■□□□□□□`
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "■".repeat(filled), "□".repeat(width - filled))
}

/// e.g. `■■■■■■□□□□ 3/5 60%`
pub fn progress_summary(checklist: &Checklist) -> String {
    format!(
        "{} {}/{} {}",
        progress_bar(checklist.progress(), 10).green(),
        checklist.completed_count(),
        checklist.total(),
        checklist.percentage_label()
    )
}

/// Title to display, blank titles are shown as a placeholder
pub fn display_title(title: &str) -> ColoredString {
    if title.is_empty() {
        "(untitled)".dimmed().italic()
    } else {
        title.cyan()
    }
}
