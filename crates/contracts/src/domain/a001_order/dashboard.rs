use super::aggregate::{Order, OrderField, OrderId};
use super::book::{OrderAction, OrderBook};
use crate::shared::list_view::{filter_list, sort_list, Page, Pagination, SortState};
use chrono::NaiveDate;

pub const ORDERS_PER_PAGE: usize = 20;

/// Complete state of the order dashboard screen.
///
/// `visible_page` derives the table from scratch on every call: search
/// filter, then the optional column sort, then the page slice.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDashboardState {
    pub book: OrderBook,
    pub search: String,
    /// `None` keeps storage order (newest arrivals on top).
    pub sort: Option<SortState<OrderField>>,
    pub pagination: Pagination,
    pub selected: Option<OrderId>,
}

impl Default for OrderDashboardState {
    fn default() -> Self {
        Self::new(OrderBook::default())
    }
}

impl OrderDashboardState {
    pub fn new(book: OrderBook) -> Self {
        Self {
            book,
            search: String::new(),
            sort: None,
            pagination: Pagination::new(ORDERS_PER_PAGE),
            selected: None,
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn toggle_sort(&mut self, field: OrderField) {
        match self.sort.as_mut() {
            Some(sort) => sort.toggle(field),
            None => self.sort = Some(SortState::ascending(field)),
        }
    }

    pub fn sort_indicator(&self, field: OrderField) -> &'static str {
        self.sort
            .map(|sort| sort.indicator(field))
            .unwrap_or(" ⇅")
    }

    /// Filtered and sorted orders before paging.
    pub fn filtered_orders(&self) -> Vec<Order> {
        let mut orders = filter_list(self.book.orders(), &self.search);
        if let Some(sort) = &self.sort {
            sort_list(&mut orders, sort);
        }
        orders
    }

    pub fn visible_page(&self) -> Page<Order> {
        self.pagination.apply(&self.filtered_orders())
    }

    /// Ignored when `page` is outside the current page range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.filtered_orders().len();
        self.pagination.go_to(page, total)
    }

    /// Row click: opens the detail row, or closes it when already open.
    pub fn toggle_details(&mut self, id: OrderId) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn apply(&mut self, action: OrderAction, confirmed: bool) -> bool {
        let changed = self.book.apply(action, confirmed);
        if changed && matches!(action, OrderAction::Delete(id) if self.selected == Some(id)) {
            self.selected = None;
        }
        changed
    }

    pub fn receive_new_order(&mut self, today: NaiveDate) -> OrderId {
        self.book.receive_new_order(today).id
    }
}
