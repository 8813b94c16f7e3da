use super::aggregate::{sample_orders, Order, OrderId};
use chrono::NaiveDate;

/// Destructive actions on an order. Each one is confirmed by the user
/// before it reaches [`OrderBook::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Delete(OrderId),
    Finish(OrderId),
}

impl OrderAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            OrderAction::Delete(_) => "Are you sure you want to delete this order?",
            OrderAction::Finish(_) => "Are you sure you want to finish this order?",
        }
    }

    pub fn order_id(&self) -> OrderId {
        match self {
            OrderAction::Delete(id) | OrderAction::Finish(id) => *id,
        }
    }
}

/// In-memory order store backing the dashboard.
///
/// New orders are prepended, so storage order is not id order. Ids come from
/// a counter that only moves forward; a deleted id is never handed out again.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_id: OrderId,
    notification_count: u32,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new(sample_orders())
    }
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        let next_id = orders
            .iter()
            .map(|o| o.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(OrderId(1));
        Self {
            orders,
            next_id,
            notification_count: 0,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn notification_count(&self) -> u32 {
        self.notification_count
    }

    /// Removes the order with `id`. Returns `false` when no such order exists.
    pub fn delete(&mut self, id: OrderId) -> bool {
        match self.orders.iter().position(|o| o.id == id) {
            Some(index) => {
                self.orders.remove(index);
                true
            }
            None => false,
        }
    }

    /// Marks the order finished. Returns `true` only when the flag changed.
    pub fn mark_finished(&mut self, id: OrderId) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) if !order.is_finished => {
                order.is_finished = true;
                true
            }
            _ => false,
        }
    }

    /// Runs a confirmed action; a declined one leaves the book untouched.
    pub fn apply(&mut self, action: OrderAction, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        match action {
            OrderAction::Delete(id) => self.delete(id),
            OrderAction::Finish(id) => self.mark_finished(id),
        }
    }

    /// Simulates an incoming order: placeholder record at the front and one
    /// more unread notification.
    pub fn receive_new_order(&mut self, today: NaiveDate) -> &Order {
        let id = self.next_id;
        self.next_id = id.next();
        self.orders.insert(0, Order::placeholder(id, today));
        self.notification_count += 1;
        &self.orders[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn receive_new_order_prepends_and_notifies() {
        let mut book = OrderBook::default();
        assert_eq!(book.len(), 7);
        assert_eq!(book.notification_count(), 0);

        let id = book.receive_new_order(today()).id;

        assert_eq!(book.len(), 8);
        assert_eq!(book.notification_count(), 1);
        assert_eq!(book.orders()[0].id, id);
        assert_eq!(id, OrderId(8));
        assert_eq!(book.orders()[0].job_type, "New Order");
    }

    #[test]
    fn ids_do_not_collide_after_deletes() {
        let mut book = OrderBook::default();
        assert!(book.delete(OrderId(3)));
        let first = book.receive_new_order(today()).id;
        let second = book.receive_new_order(today()).id;
        assert_eq!(first, OrderId(8));
        assert_eq!(second, OrderId(9));

        let mut ids: Vec<OrderId> = book.orders().iter().map(|o| o.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), book.len());
    }

    #[test]
    fn second_delete_is_a_noop() {
        let mut book = OrderBook::default();
        assert!(book.delete(OrderId(5)));
        let after_first = book.len();
        assert!(!book.delete(OrderId(5)));
        assert_eq!(book.len(), after_first);
        assert!(book.get(OrderId(5)).is_none());
    }

    #[test]
    fn mark_finished_is_idempotent() {
        let mut once = OrderBook::default();
        once.mark_finished(OrderId(7));

        let mut twice = OrderBook::default();
        assert!(twice.mark_finished(OrderId(7)));
        assert!(!twice.mark_finished(OrderId(7)));

        assert_eq!(once, twice);
        assert!(twice.get(OrderId(7)).unwrap().is_finished);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut book = OrderBook::default();
        let before = book.clone();
        assert!(!book.delete(OrderId(42)));
        assert!(!book.mark_finished(OrderId(42)));
        assert_eq!(book, before);
    }

    #[test]
    fn declined_confirmation_leaves_state_untouched() {
        let mut book = OrderBook::default();
        let before = book.clone();
        assert!(!book.apply(OrderAction::Delete(OrderId(1)), false));
        assert!(!book.apply(OrderAction::Finish(OrderId(1)), false));
        assert_eq!(book, before);

        assert!(book.apply(OrderAction::Delete(OrderId(1)), true));
        assert_eq!(book.len(), 6);
    }

    #[test]
    fn empty_book_starts_ids_at_one() {
        let mut book = OrderBook::new(Vec::new());
        assert!(book.is_empty());
        assert_eq!(book.receive_new_order(today()).id, OrderId(1));
    }

    #[test]
    fn action_prompts() {
        assert_eq!(
            OrderAction::Finish(OrderId(1)).prompt(),
            "Are you sure you want to finish this order?"
        );
        assert_eq!(OrderAction::Delete(OrderId(4)).order_id(), OrderId(4));
    }
}
