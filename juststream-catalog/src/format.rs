/// Formats a playback position as `h:mm:ss`, or `m:ss` below one hour.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let (hours, mins, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

/// Formats a running time for display on a card, e.g. `1h 5m` or `42m`.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use googletest::prelude::*;

    #[googletest::test]
    fn test_format_time() {
        expect_that!(format_time(0.0), eq("0:00"));
        expect_that!(format_time(59.9), eq("0:59"));
        expect_that!(format_time(61.0), eq("1:01"));
        expect_that!(format_time(3600.0), eq("1:00:00"));
        expect_that!(format_time(3725.0), eq("1:02:05"));
        expect_that!(format_time(-4.0), eq("0:00"));
        expect_that!(format_time(f64::NAN), eq("0:00"));
    }

    #[googletest::test]
    fn test_format_duration() {
        expect_that!(format_duration(42 * 60), eq("42m"));
        expect_that!(format_duration(3600 + 5 * 60 + 30), eq("1h 5m"));
        expect_that!(format_duration(0), eq("0m"));
    }
}
