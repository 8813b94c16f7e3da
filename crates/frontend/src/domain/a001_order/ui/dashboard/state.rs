use contracts::domain::a001_order::aggregate::{OrderField, OrderId};
use contracts::domain::a001_order::book::OrderAction;
use contracts::domain::a001_order::dashboard::OrderDashboardState;
use leptos::prelude::*;

use crate::shared::{confirm, today};

pub fn create_state() -> RwSignal<OrderDashboardState> {
    RwSignal::new(OrderDashboardState::default())
}

pub fn set_search(state: RwSignal<OrderDashboardState>, value: String) {
    state.update(|s| s.set_search(value));
}

pub fn toggle_sort(state: RwSignal<OrderDashboardState>, field: OrderField) {
    state.update(|s| s.toggle_sort(field));
}

pub fn go_to_page(state: RwSignal<OrderDashboardState>, page: usize) {
    state.update(|s| {
        s.go_to_page(page);
    });
}

pub fn toggle_details(state: RwSignal<OrderDashboardState>, id: OrderId) {
    state.update(|s| s.toggle_details(id));
}

/// Asks for confirmation, then applies the action.
pub fn run_action(state: RwSignal<OrderDashboardState>, action: OrderAction) {
    let confirmed = confirm(action.prompt());
    let mut changed = false;
    state.update(|s| changed = s.apply(action, confirmed));
    if changed {
        log::info!("{:?} applied", action);
    } else if confirmed {
        log::debug!("{:?} changed nothing", action);
    }
}

pub fn receive_new_order(state: RwSignal<OrderDashboardState>) {
    let mut id = None;
    state.update(|s| id = Some(s.receive_new_order(today())));
    if let Some(id) = id {
        log::info!("New order {} received", id);
    }
}
