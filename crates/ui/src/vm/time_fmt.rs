use chrono::{DateTime, Local, Utc};

/// Short local wall-clock label for chat timestamps.
#[must_use]
pub fn clock_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::time::fixed_now;

    #[test]
    fn label_is_hours_and_minutes() {
        let label = clock_time(fixed_now());
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }
}
