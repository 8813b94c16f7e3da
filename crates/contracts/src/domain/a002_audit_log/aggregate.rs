use crate::shared::date_range::{format_timestamp, parse_timestamp};
use crate::shared::list_view::{locale_compare, Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One recorded administrative action. Entries are never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: u32,
    pub action: String,
    /// ISO-8601, e.g. `2024-10-01T10:00:00Z`
    pub timestamp: String,
}

impl AuditLogEntry {
    pub fn new(id: u32, action: &str, timestamp: &str) -> Self {
        Self {
            id,
            action: action.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    pub fn display_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

pub fn sample_audit_log() -> Vec<AuditLogEntry> {
    vec![
        AuditLogEntry::new(1, "User logged in", "2024-10-01T10:00:00Z"),
        AuditLogEntry::new(2, "User logged out", "2024-10-02T11:30:00Z"),
        AuditLogEntry::new(3, "Created a new order", "2024-10-03T09:15:00Z"),
        AuditLogEntry::new(4, "Updated order status", "2024-10-04T14:45:00Z"),
        AuditLogEntry::new(5, "Deleted an order", "2024-10-05T16:00:00Z"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditLogField {
    Action,
    Timestamp,
}

impl AuditLogField {
    pub const ALL: [AuditLogField; 2] = [AuditLogField::Action, AuditLogField::Timestamp];

    pub fn label(&self) -> &'static str {
        match self {
            AuditLogField::Action => "Action",
            AuditLogField::Timestamp => "Timestamp",
        }
    }
}

impl Searchable for AuditLogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.action.as_str()]
    }
}

impl Sortable for AuditLogEntry {
    type Field = AuditLogField;

    fn compare_by_field(&self, other: &Self, field: AuditLogField) -> Ordering {
        match field {
            AuditLogField::Action => locale_compare(&self.action, &other.action),
            AuditLogField::Timestamp => {
                match (parse_timestamp(&self.timestamp), parse_timestamp(&other.timestamp)) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => self.timestamp.cmp(&other.timestamp),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_compare_chronologically_across_offsets() {
        let utc = AuditLogEntry::new(1, "a", "2024-10-01T10:00:00Z");
        // 09:30 UTC written with a +02:00 offset
        let offset = AuditLogEntry::new(2, "b", "2024-10-01T11:30:00+02:00");
        assert_eq!(
            offset.compare_by_field(&utc, AuditLogField::Timestamp),
            Ordering::Less
        );
    }

    #[test]
    fn unparsable_timestamps_sort_after_parsed_ones() {
        let a = AuditLogEntry::new(1, "a", "later");
        let b = AuditLogEntry::new(2, "b", "2024-10-01T10:00:00Z");
        assert_eq!(a.compare_by_field(&b, AuditLogField::Timestamp), Ordering::Greater);
        assert_eq!(b.compare_by_field(&a, AuditLogField::Timestamp), Ordering::Less);
    }

    #[test]
    fn mixed_timestamps_sort_consistently() {
        // 08:00 UTC, 09:00 UTC, no offset
        let offset = AuditLogEntry::new(1, "a", "2024-10-01T10:00:00+02:00");
        let utc = AuditLogEntry::new(2, "b", "2024-10-01T09:00:00Z");
        let naive = AuditLogEntry::new(3, "c", "2024-10-01T09:30:00");
        let garbage = AuditLogEntry::new(4, "d", "2024-10-01");

        let mut entries = vec![naive.clone(), garbage.clone(), utc.clone(), offset.clone()];
        entries.sort_by(|a, b| a.compare_by_field(b, AuditLogField::Timestamp));
        let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2, 4, 3]);

        // text order would put the offset entry after the naive one
        assert_eq!(offset.compare_by_field(&naive, AuditLogField::Timestamp), Ordering::Less);
        assert_eq!(naive.compare_by_field(&offset, AuditLogField::Timestamp), Ordering::Greater);
    }

    #[test]
    fn display_timestamp_uses_date_and_time() {
        assert_eq!(
            sample_audit_log()[0].display_timestamp(),
            "10/1/2024 - 10:00:00 AM"
        );
    }
}
