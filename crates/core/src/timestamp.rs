/// Parse a colon-separated timestamp ("M:SS" or "H:MM:SS") into total seconds.
///
/// Any other shape, including non-numeric fields, yields `0`. Downstream
/// stages treat `0` as "duration unknown", so this never fails.
pub fn parse_timestamp(text: &str) -> u64 {
    let fields: Option<Vec<u64>> = text
        .trim()
        .split(':')
        .map(|field| field.parse().ok())
        .collect();

    match fields.as_deref() {
        Some([mins, secs]) => mins * 60 + secs,
        Some([hours, mins, secs]) => hours * 3600 + mins * 60 + secs,
        _ => 0,
    }
}

/// Format seconds as a "M:SS" timestamp, or "H:MM:SS" once past the hour.
///
/// Negative input is clamped to zero. The hour field is omitted entirely when
/// it would be zero, so `300` renders as "5:00" rather than "0:05:00".
pub fn format_timestamp(seconds: i64) -> String {
    let total = seconds.max(0) as u64;
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_two_fields() {
        assert_eq!(parse_timestamp("0:00"), 0);
        assert_eq!(parse_timestamp("5:30"), 330);
        assert_eq!(parse_timestamp("59:59"), 3599);
    }

    #[test]
    fn test_parse_timestamp_three_fields() {
        assert_eq!(parse_timestamp("1:00:00"), 3600);
        assert_eq!(parse_timestamp("2:03:04"), 7384);
    }

    #[test]
    fn test_parse_timestamp_malformed() {
        assert_eq!(parse_timestamp(""), 0);
        assert_eq!(parse_timestamp("abc"), 0);
        assert_eq!(parse_timestamp("1:2:3:4"), 0);
        assert_eq!(parse_timestamp("5:xx"), 0);
        assert_eq!(parse_timestamp("-1:30"), 0);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(65), "1:05");
        assert_eq!(format_timestamp(600), "10:00");
        assert_eq!(format_timestamp(3600), "1:00:00");
        assert_eq!(format_timestamp(3661), "1:01:01");
    }

    #[test]
    fn test_format_timestamp_clamps_negative() {
        assert_eq!(format_timestamp(-42), "0:00");
    }

    #[test]
    fn test_round_trip() {
        for s in [0u64, 1, 59, 60, 61, 599, 600, 601, 3599, 3600, 3661, 7384, 86399] {
            assert_eq!(parse_timestamp(&format_timestamp(s as i64)), s);
        }
    }
}
