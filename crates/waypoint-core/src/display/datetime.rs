//! Timestamp formatting in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a document timestamp as `YYYY-MM-DD HH:MM TZ` in the system
/// timezone.
///
/// Store timestamps are UTC; listings and previews show them the way the
/// agent at the terminal reads a clock.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_shape() {
        let rendered = LocalDateTime(&Timestamp::UNIX_EPOCH).to_string();
        // Date, time and zone separated by single spaces
        let parts: Vec<&str> = rendered.splitn(3, ' ').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 10);
        assert_eq!(parts[1].len(), 5);
    }
}
