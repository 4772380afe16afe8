use chrono::{DateTime, FixedOffset, TimeZone};

/// Format a unix timestamp the way API responses show dates (+0700).
pub fn timestamp_to_string(timestamp: i64) -> Option<String> {
    let offset = FixedOffset::east_opt(7 * 60 * 60)?; // +0700
    let datetime: DateTime<FixedOffset> = offset.timestamp_opt(timestamp, 0).single()?;
    Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Parse a path id. Only positive integers are valid row ids.
pub fn parse_path_id(id: &str) -> Option<i32> {
    match id.trim().parse::<i32>() {
        Ok(val) if val > 0 => Some(val),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_id() {
        assert_eq!(parse_path_id("7"), Some(7));
        assert_eq!(parse_path_id("0"), None);
        assert_eq!(parse_path_id("-3"), None);
        assert_eq!(parse_path_id("abc"), None);
        assert_eq!(parse_path_id("1.5"), None);
    }

    #[test]
    fn test_timestamp_to_string() {
        assert_eq!(
            timestamp_to_string(0),
            Some("1970-01-01 07:00:00".to_string())
        );
    }
}
