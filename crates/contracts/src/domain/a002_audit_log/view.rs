use super::aggregate::{AuditLogEntry, AuditLogField};
use crate::shared::date_range::DateRange;
use crate::shared::list_view::{sort_list, Searchable, SortState};

/// Filter panel and sort header state of the audit log screen.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogQuery {
    pub search: String,
    /// Raw `<input type="date">` values, empty when unset.
    pub start_date: String,
    pub end_date: String,
    pub sort: SortState<AuditLogField>,
    pub filters_open: bool,
}

impl Default for AuditLogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            sort: SortState::ascending(AuditLogField::Action),
            filters_open: false,
        }
    }
}

impl AuditLogQuery {
    pub fn date_range(&self) -> DateRange {
        DateRange::from_inputs(&self.start_date, &self.end_date)
    }

    pub fn toggle_sort(&mut self, field: AuditLogField) {
        self.sort.toggle(field);
    }

    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
    }

    /// Entries inside the date window whose action matches the search,
    /// ordered by the active column.
    pub fn apply(&self, entries: &[AuditLogEntry]) -> Vec<AuditLogEntry> {
        let range = self.date_range();
        let mut visible: Vec<AuditLogEntry> = entries
            .iter()
            .filter(|entry| range.contains_timestamp(&entry.timestamp))
            .filter(|entry| entry.matches_filter(&self.search))
            .cloned()
            .collect();
        sort_list(&mut visible, &self.sort);
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_audit_log::aggregate::sample_audit_log;
    use crate::shared::list_view::SortDirection;

    fn ids(entries: &[AuditLogEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn default_view_sorts_by_action_ascending() {
        let visible = AuditLogQuery::default().apply(&sample_audit_log());
        let actions: Vec<&str> = visible.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(
            actions,
            vec![
                "Created a new order",
                "Deleted an order",
                "Updated order status",
                "User logged in",
                "User logged out",
            ]
        );
    }

    #[test]
    fn start_date_keeps_october_third_onwards() {
        let query = AuditLogQuery {
            start_date: "2024-10-03".to_string(),
            ..AuditLogQuery::default()
        };
        let mut visible = ids(&query.apply(&sample_audit_log()));
        visible.sort();
        assert_eq!(visible, vec![3, 4, 5]);
    }

    #[test]
    fn search_and_range_combine() {
        let query = AuditLogQuery {
            search: "ORDER".to_string(),
            end_date: "2024-10-04".to_string(),
            ..AuditLogQuery::default()
        };
        // Oct 4 14:45 is after the end bound at midnight
        assert_eq!(ids(&query.apply(&sample_audit_log())), vec![3]);
    }

    #[test]
    fn timestamp_descending_is_newest_first() {
        let mut query = AuditLogQuery::default();
        query.toggle_sort(AuditLogField::Timestamp);
        query.toggle_sort(AuditLogField::Timestamp);
        assert_eq!(query.sort.direction, SortDirection::Desc);
        assert_eq!(ids(&query.apply(&sample_audit_log())), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn timestamp_sort_with_search() {
        let mut query = AuditLogQuery::default();
        query.toggle_sort(AuditLogField::Timestamp);
        query.search = "user".to_string();
        assert_eq!(ids(&query.apply(&sample_audit_log())), vec![1, 2]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let query = AuditLogQuery {
            start_date: "2025-01-01".to_string(),
            ..AuditLogQuery::default()
        };
        assert!(query.apply(&sample_audit_log()).is_empty());
    }

    #[test]
    fn filters_panel_toggles() {
        let mut query = AuditLogQuery::default();
        query.toggle_filters();
        assert!(query.filters_open);
        query.toggle_filters();
        assert!(!query.filters_open);
    }
}
