use colored::*;
use smarttodo_core::lookup::{short_id, shortest_unique_prefix};
use std::fmt::Display;

/// Represents an ID that has been processed and is ready for formatted display.
///
/// Only the short part of the id is displayed (`01hq3v5y` for
/// `checklist-01hq3v5y...`), the characters needed to reference it are
/// highlighted and the rest is dimmed.
///
/// Lengths are counted in characters, ids loaded from documents may hold
/// any text.
#[derive(Debug, Clone)]
pub struct DisplayableId {
    unique_part: String,
    dimmed_part: String,
}

impl DisplayableId {
    pub fn new(full_id: &str, unique_prefix_len: usize) -> Self {
        let short = short_id(full_id);
        let display_len = std::cmp::max(8, unique_prefix_len);
        let unique_len = std::cmp::min(unique_prefix_len, display_len);

        Self {
            unique_part: short.chars().take(unique_len).collect(),
            dimmed_part: short
                .chars()
                .take(display_len)
                .skip(unique_len)
                .collect(),
        }
    }

    /// Highlight the shortest prefix telling `id` apart from `siblings`
    pub fn among<'a>(id: &str, siblings: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(id, shortest_unique_prefix(id, siblings))
    }

    /// Displayed characters without any styling, for aligned tables
    pub fn plain(&self) -> String {
        format!("{}{}", self.unique_part, self.dimmed_part)
    }
}

impl Display for DisplayableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.unique_part.yellow().bold(),
            self.dimmed_part.dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        colored::control::set_override(false);
        let id = DisplayableId::new("checklist-01hq3v5y0e4xj8k2v9m6t1c7rn", 3);
        assert_eq!(id.unique_part, "01h");
        assert_eq!(id.dimmed_part, "q3v5y");
        assert_eq!(id.to_string(), "01hq3v5y");
        assert_eq!(id.plain(), "01hq3v5y");

        let long = DisplayableId::new("task-0123456789ab", 10);
        assert_eq!(long.to_string(), "0123456789");
    }

    #[test]
    fn test_non_ascii_ids() {
        colored::control::set_override(false);
        let alone = DisplayableId::among("checklist-éa", ["checklist-éa"]);
        assert_eq!(alone.unique_part, "é");
        assert_eq!(alone.plain(), "éa");

        let id = DisplayableId::among("task-日本語のid", ["task-日本語のid", "task-日本x"]);
        assert_eq!(id.unique_part, "日本語");
        assert_eq!(id.to_string(), "日本語のid");
    }
}
