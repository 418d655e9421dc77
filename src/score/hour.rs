/// Separator between the start and end of a time-window label (EN DASH, not a hyphen).
pub const WINDOW_SEPARATOR: char = '\u{2013}';

/// Parse the starting hour out of a time-window label such as `"12:00–13:59"`.
///
/// Best-effort: a missing label, a label without an en-dash, or a non-numeric
/// hour component all yield `None` instead of an error.
pub fn extract_start_hour(label: Option<&str>) -> Option<i64> {
    let (start, _) = label?.split_once(WINDOW_SEPARATOR)?;
    let hour = start.split(':').next()?;
    hour.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_hour() {
        assert_eq!(extract_start_hour(Some("12:00–13:59")), Some(12));
        assert_eq!(extract_start_hour(Some("9:30–10:00")), Some(9));
        assert_eq!(extract_start_hour(Some("08:00–08:59")), Some(8));
        assert_eq!(extract_start_hour(Some(" 7:00 – 7:59")), Some(7));
    }

    #[test]
    fn start_without_minutes_still_parses() {
        assert_eq!(extract_start_hour(Some("14–15")), Some(14));
    }

    #[test]
    fn missing_or_malformed_labels_are_none() {
        assert_eq!(extract_start_hour(None), None);
        assert_eq!(extract_start_hour(Some("")), None);
        assert_eq!(extract_start_hour(Some("12:00-13:59")), None); // hyphen, not en-dash
        assert_eq!(extract_start_hour(Some("12:00—13:59")), None); // em-dash
        assert_eq!(extract_start_hour(Some("noon–13:59")), None);
        assert_eq!(extract_start_hour(Some(":30–13:59")), None);
        assert_eq!(extract_start_hour(Some("12.5:00–13:59")), None);
    }
}
