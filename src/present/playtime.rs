//! Elapsed play time as words.

/// Format a duration in seconds as `1 hours 02 minutes 03 seconds`.
///
/// Leading zero units are skipped; every unit after the first one shown is
/// zero-padded to two digits. Negative durations count as zero.
#[must_use]
pub fn format_playtime(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let units = [
        (seconds / 3600, "hours"),
        ((seconds % 3600) / 60, "minutes"),
        (seconds % 60, "seconds"),
    ];

    let mut parts = Vec::new();
    for (value, unit) in units {
        if parts.is_empty() {
            if value != 0 {
                parts.push(format!("{value} {unit}"));
            }
        } else {
            parts.push(format!("{value:02} {unit}"));
        }
    }

    if parts.is_empty() {
        "0 seconds".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_only() {
        assert_eq!(format_playtime(23), "23 seconds");
        assert_eq!(format_playtime(5), "5 seconds");
    }

    #[test]
    fn test_minutes_pad_seconds() {
        assert_eq!(format_playtime(65), "1 minutes 05 seconds");
        assert_eq!(format_playtime(120), "2 minutes 00 seconds");
    }

    #[test]
    fn test_hours_pad_everything_after() {
        assert_eq!(format_playtime(3600 + 5), "1 hours 00 minutes 05 seconds");
        assert_eq!(format_playtime(2 * 3600 + 11 * 60 + 9), "2 hours 11 minutes 09 seconds");
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(format_playtime(0), "0 seconds");
        assert_eq!(format_playtime(-4), "0 seconds");
    }
}
