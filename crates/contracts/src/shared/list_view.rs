//! Filter / sort / paginate helpers shared by every list screen.
//!
//! All stages are pure functions over slices. Screens recompute the whole
//! chain on every input change; datasets are small enough that no
//! incremental path is kept.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Records that can be matched against a free-text search box.
pub trait Searchable {
    /// Text fields the search box looks into.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field.
    ///
    /// Surrounding whitespace is ignored; an empty filter matches everything.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Records that can be ordered by one of a fixed set of fields.
pub trait Sortable {
    type Field: Copy + PartialEq;

    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Current sort column and direction of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active column flips, a new column starts ascending.
    pub fn toggle(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn indicator(&self, field: F) -> &'static str {
        if self.field != field {
            " ⇅"
        } else if self.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    }
}

/// Keeps records whose search fields contain `filter`, preserving order.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Stable sort; equal keys keep their input order in both directions.
pub fn sort_list<T: Sortable>(items: &mut [T], sort: &SortState<T::Field>) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, sort.field);
        match sort.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
}

/// Locale-style string ordering: case-insensitive first, lowercase before
/// uppercase when the letters are the same.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Number of pages for `total` records; an empty list still has one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// One page of a derived list. `page` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Slices `items` into the requested page, clamping the page number into
/// `[1, page_count]`.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let total = items.len();
    let page_count = page_count(total, page_size);
    let page = page.clamp(1, page_count);
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        items: items[start..end].to_vec(),
        page,
        page_count,
        total,
    }
}

/// Current page of a paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: usize,
    pub current_page: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    /// Moves to `page` when it lies within `[1, page_count]`; anything else is
    /// ignored. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize, total: usize) -> bool {
        let pages = page_count(total, self.page_size);
        if page < 1 || page > pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn apply<T: Clone>(&self, items: &[T]) -> Page<T> {
        paginate(items, self.page_size, self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        amount: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum RowField {
        Name,
        Amount,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    impl Sortable for Row {
        type Field = RowField;

        fn compare_by_field(&self, other: &Self, field: RowField) -> Ordering {
            match field {
                RowField::Name => locale_compare(self.name, other.name),
                RowField::Amount => compare_f64(self.amount, other.amount),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Poster", amount: 10.0 },
            Row { id: 2, name: "flyer", amount: 5.0 },
            Row { id: 3, name: "Sticker", amount: 10.0 },
            Row { id: 4, name: "Flyer A5", amount: 5.0 },
            Row { id: 5, name: "banner", amount: 7.5 },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn filter_keeps_order_and_matches_case_insensitively() {
        let all = rows();
        let hits = filter_list(&all, "FLY");
        assert_eq!(ids(&hits), vec![2, 4]);
        for hit in &hits {
            assert!(hit.name.to_lowercase().contains("fly"));
        }
    }

    #[test]
    fn empty_filter_keeps_everything_and_miss_is_empty() {
        let all = rows();
        assert_eq!(filter_list(&all, "").len(), all.len());
        assert!(filter_list(&all, "laminate").is_empty());
    }

    #[test]
    fn filter_ignores_surrounding_whitespace() {
        let all = rows();
        assert_eq!(ids(&filter_list(&all, "  fly ")), ids(&filter_list(&all, "fly")));
        assert_eq!(filter_list(&all, "   ").len(), all.len());
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let mut asc = rows();
        sort_list(&mut asc, &SortState::ascending(RowField::Amount));
        assert_eq!(ids(&asc), vec![2, 4, 5, 1, 3]);

        let mut desc = rows();
        sort_list(&mut desc, &SortState::new(RowField::Amount, SortDirection::Desc));
        assert_eq!(ids(&desc), vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn sort_is_a_monotonic_permutation() {
        let mut sorted = rows();
        sort_list(&mut sorted, &SortState::ascending(RowField::Name));
        assert_eq!(sorted.len(), rows().len());
        for pair in sorted.windows(2) {
            assert_ne!(
                pair[0].compare_by_field(&pair[1], RowField::Name),
                Ordering::Greater
            );
        }
        assert_eq!(ids(&sorted), vec![5, 2, 4, 1, 3]);
    }

    #[test]
    fn locale_compare_ignores_case_and_puts_lowercase_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn toggle_flips_active_field_and_resets_new_field() {
        let mut sort = SortState::ascending(RowField::Name);
        sort.toggle(RowField::Name);
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.toggle(RowField::Amount);
        assert_eq!(sort, SortState::ascending(RowField::Amount));
        assert_eq!(sort.indicator(RowField::Amount), " ▲");
        assert_eq!(sort.indicator(RowField::Name), " ⇅");
    }

    #[test]
    fn page_count_treats_empty_as_one_page() {
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(45, 20), 3);
    }

    #[test]
    fn pages_concatenate_back_to_the_input() {
        let items: Vec<u32> = (1..=45).collect();
        let pages = page_count(items.len(), 20);
        let mut rebuilt = Vec::new();
        for p in 1..=pages {
            let page = paginate(&items, 20, p);
            assert!(page.items.len() <= 20);
            rebuilt.extend(page.items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn requested_page_is_clamped() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 20, 0).page, 1);
        let last = paginate(&items, 20, 9);
        assert_eq!(last.page, 2);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);

        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 20, 3);
        assert_eq!((page.page, page.page_count, page.items.len()), (1, 1, 0));
    }

    #[test]
    fn go_to_outside_range_is_ignored() {
        let mut pagination = Pagination::new(20);
        assert!(!pagination.go_to(0, 45));
        assert!(!pagination.go_to(4, 45));
        assert_eq!(pagination.current_page, 1);
        assert!(pagination.go_to(3, 45));
        assert_eq!(pagination.current_page, 3);
    }
}
