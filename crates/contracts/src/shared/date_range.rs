use chrono::{DateTime, NaiveDate, Utc};

/// Inclusive date window taken from two `<input type="date">` values.
///
/// Bounds sit at UTC midnight of the chosen day, so an end date of
/// `2024-10-05` keeps records stamped exactly at `2024-10-05T00:00:00Z`
/// and excludes later ones that day. A missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Builds a range from raw input values. Empty or unparsable values
    /// leave that side open.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: parse_input_date(start),
            end: parse_input_date(end),
        }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    fn start_instant(&self) -> DateTime<Utc> {
        self.start
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn end_instant(&self) -> DateTime<Utc> {
        self.end
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start_instant() && *instant <= self.end_instant()
    }

    /// Same as [`contains`](Self::contains) for an ISO-8601 string. An open
    /// range keeps everything; otherwise a timestamp that does not parse is
    /// outside.
    pub fn contains_timestamp(&self, timestamp: &str) -> bool {
        if self.is_open() {
            return true;
        }
        parse_timestamp(timestamp)
            .map(|instant| self.contains(&instant))
            .unwrap_or(false)
    }
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `2024-10-03T09:15:00Z` -> `10/3/2024 - 9:15:00 AM`
pub fn format_timestamp(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => format!(
            "{} - {}",
            dt.format("%-m/%-d/%Y"),
            dt.format("%-I:%M:%S %p")
        ),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_range_contains_any_valid_timestamp() {
        let range = DateRange::default();
        assert!(range.is_open());
        assert!(range.contains_timestamp("1999-01-01T00:00:00Z"));
        assert!(range.contains_timestamp("2099-12-31T23:59:59Z"));
    }

    #[test]
    fn bounds_are_inclusive_at_midnight() {
        let range = DateRange::from_inputs("2024-10-03", "2024-10-05");
        assert!(range.contains_timestamp("2024-10-03T00:00:00Z"));
        assert!(range.contains_timestamp("2024-10-04T14:45:00Z"));
        assert!(range.contains_timestamp("2024-10-05T00:00:00Z"));
        assert!(!range.contains_timestamp("2024-10-05T16:00:00Z"));
        assert!(!range.contains_timestamp("2024-10-02T23:59:59Z"));
    }

    #[test]
    fn unparsable_inputs_leave_side_open() {
        let range = DateRange::from_inputs("", "not-a-date");
        assert!(range.is_open());
    }

    #[test]
    fn invalid_timestamp_only_passes_open_range() {
        assert!(DateRange::default().contains_timestamp("yesterday"));
        assert!(!DateRange::from_inputs("2024-10-01", "").contains_timestamp("yesterday"));
    }

    #[test]
    fn timestamp_formatting() {
        assert_eq!(
            format_timestamp("2024-10-03T09:15:00Z"),
            "10/3/2024 - 9:15:00 AM"
        );
        assert_eq!(
            format_timestamp("2024-10-05T16:00:00Z"),
            "10/5/2024 - 4:00:00 PM"
        );
        assert_eq!(format_timestamp("garbage"), "garbage");
    }
}
