/// Result of resolving a reference typed by a user against a set of ids
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<T> {
    Single(T),
    Many(Vec<T>),
    NotFound,
}

/// The part of an id a user types, e.g. `01hq3v5y...` for `checklist-01hq3v5y...`
pub fn short_id(id: &str) -> &str {
    id.split_once('-').map(|(_, rest)| rest).unwrap_or(id)
}

/// Resolve a reference against `items`.
///
/// The reference may be a full id or a prefix of its short part, comparison
/// is case-insensitive. An exact id match always wins over prefix matches.
pub fn find_by_prefix<'a, T, F>(items: &'a [T], reference: &str, id_of: F) -> Lookup<&'a T>
where
    F: Fn(&T) -> &str,
{
    let reference = reference.trim().to_lowercase();
    if reference.is_empty() {
        return Lookup::NotFound;
    }

    if let Some(exact) = items.iter().find(|item| id_of(item).to_lowercase() == reference) {
        return Lookup::Single(exact);
    }

    let mut matches: Vec<&T> = items
        .iter()
        .filter(|item| short_id(id_of(item)).to_lowercase().starts_with(&reference))
        .collect();

    match matches.len() {
        0 => Lookup::NotFound,
        1 => Lookup::Single(matches.remove(0)),
        _ => Lookup::Many(matches),
    }
}

/// Length of the shortest prefix of `short_id(id)` that matches no other id
pub fn shortest_unique_prefix<'a>(id: &str, all_ids: impl IntoIterator<Item = &'a str>) -> usize {
    let target = short_id(id).to_lowercase();
    let longest_shared = all_ids
        .into_iter()
        .filter(|other| *other != id)
        .map(|other| {
            short_id(other)
                .to_lowercase()
                .chars()
                .zip(target.chars())
                .take_while(|(a, b)| a == b)
                .count()
        })
        .max()
        .unwrap_or(0);

    std::cmp::min(longest_shared + 1, target.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    static IDS: [&str; 3] = ["checklist-01abc", "checklist-01abd", "checklist-02xyz"];

    fn find(reference: &str) -> Lookup<&&'static str> {
        find_by_prefix(&IDS, reference, |id| *id)
    }

    #[test]
    fn test_single_match() {
        assert_eq!(find("02"), Lookup::Single(&IDS[2]));
        assert_eq!(find("01ABD"), Lookup::Single(&IDS[1]));
    }

    #[test]
    fn test_full_id_match() {
        assert_eq!(find("checklist-01abc"), Lookup::Single(&IDS[0]));
    }

    #[test]
    fn test_ambiguous_match() {
        assert_eq!(find("01ab"), Lookup::Many(vec![&IDS[0], &IDS[1]]));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find("03"), Lookup::NotFound);
        assert_eq!(find("  "), Lookup::NotFound);
    }

    #[test]
    fn test_shortest_unique_prefix() {
        assert_eq!(shortest_unique_prefix(IDS[0], IDS), 5);
        assert_eq!(shortest_unique_prefix(IDS[2], IDS), 2);
        assert_eq!(shortest_unique_prefix("task-abc", ["task-abc"]), 1);
    }

    #[test]
    fn test_shortest_unique_prefix_counts_chars() {
        assert_eq!(shortest_unique_prefix("task-éé", ["task-éé", "task-éa"]), 2);
        assert_eq!(shortest_unique_prefix("task-é", ["task-é", "task-éx"]), 1);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("task-01abc"), "01abc");
        assert_eq!(short_id("plain"), "plain");
    }
}
