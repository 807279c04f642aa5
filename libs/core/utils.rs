use std::time::{SystemTime, UNIX_EPOCH};

use ulid::Ulid;

/// Milliseconds since the unix epoch
pub fn unix_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Generate a new id such as `checklist-01hq3v5y0e4xj8k2v9m6t1c7rn`
pub fn new_id(kind: &str) -> String {
    format!("{kind}-{}", Ulid::new().to_string().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_prefixed_and_unique() {
        let a = new_id("task");
        let b = new_id("task");
        assert!(a.starts_with("task-"));
        assert_eq!(a.len(), "task-".len() + 26);
        assert_ne!(a, b);
    }
}
