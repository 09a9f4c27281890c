use chrono::{DateTime, Utc};

/// Countdown display: whole minutes and zero-padded seconds.
#[must_use]
pub fn format_remaining(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_are_zero_padded() {
        assert_eq!(format_remaining(300), "5:00");
        assert_eq!(format_remaining(61), "1:01");
        assert_eq!(format_remaining(9), "0:09");
        assert_eq!(format_remaining(0), "0:00");
    }
}
