use chrono::{DateTime, Local, Utc};
use chrono_humanize::HumanTime;

fn ms_to_datetime(ms: u64) -> eyre::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms as i64)
        .ok_or_else(|| eyre::eyre!("Failed to create DateTime from milliseconds: {}", ms))
}

/// e.g. "2024-03-01 09:15 (3 days ago)"
pub fn format_created_at(ms: u64) -> eyre::Result<String> {
    let created = ms_to_datetime(ms)?;
    let local = created.with_timezone(&Local);
    Ok(format!(
        "{} ({})",
        local.format("%Y-%m-%d %H:%M"),
        HumanTime::from(created)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_created_at() {
        let formatted = format_created_at(0).unwrap();
        assert!(formatted.ends_with("ago)"), "{formatted}");
    }
}
