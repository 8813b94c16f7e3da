mod state;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_order::aggregate::{Order, OrderField};
use contracts::domain::a001_order::book::OrderAction;
use leptos::prelude::*;
use thaw::*;

const COLUMN_COUNT: &str = "7";

#[component]
fn NotificationBell(#[prop(into)] count: Signal<u32>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="notification-bell"
            aria-label="Notification"
            title="Simulate a new order"
            on:click=move |_| on_click.run(())
        >
            {icon("bell")}
            <Show when=move || { count.get() > 0 }>
                <span class="notification-bell__count">{move || count.get().to_string()}</span>
            </Show>
        </button>
    }
}

#[component]
fn OrderDetailsRow(order: Order) -> impl IntoView {
    let value = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    view! {
        <tr class="table__row table__row--details">
            <td colspan=COLUMN_COUNT>
                <div class="order-details">
                    <div><strong>"Paper Size: "</strong>{value(order.paper_size)}</div>
                    <div>
                        <strong>"Number of Copies: "</strong>
                        {value(order.number_of_copies.map(|n| n.to_string()))}
                    </div>
                    <div><strong>"Color Option: "</strong>{value(order.color_option)}</div>
                    <div><strong>"Additional Note: "</strong>{value(order.additional_note)}</div>
                    <div><strong>"File Path: "</strong>{value(order.file_path)}</div>
                </div>
            </td>
        </tr>
    }
}

#[component]
pub fn OrderDashboard() -> impl IntoView {
    let state = state::create_state();

    let page = Memo::new(move |_| state.with(|s| s.visible_page()));
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let selected = Memo::new(move |_| state.with(|s| s.selected));

    let header_cell = move |field: OrderField| {
        view! {
            <SortableHeaderCell
                label=field.label()
                indicator=Signal::derive(move || state.with(|s| s.sort_indicator(field)))
                on_sort=Callback::new(move |_| state::toggle_sort(state, field))
            />
        }
    };

    let render_row = move |order: Order, filter: &str| {
        let id = order.id;
        let is_open = move || selected.get() == Some(id);
        let details = order.clone();
        let finished = order.is_finished;

        view! {
            <tr
                class="table__row"
                class:table__row--selected=is_open
                style="cursor: pointer;"
                on:click=move |_| state::toggle_details(state, id)
            >
                <td class="table__cell">{id.to_string()}</td>
                <td class="table__cell">{highlight_matches(&order.customer_name, filter)}</td>
                <td class="table__cell">{highlight_matches(&order.job_type, filter)}</td>
                <td class="table__cell" style="text-align: right;">{order.formatted_price()}</td>
                <td class="table__cell">{order.date.clone()}</td>
                <td class="table__cell">
                    <Badge
                        appearance=BadgeAppearance::Tint
                        color=if finished { BadgeColor::Success } else { BadgeColor::Warning }
                    >
                        {order.status_label()}
                    </Badge>
                </td>
                <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                    <button
                        class="icon-btn icon-btn--success"
                        aria-label="Finish Order"
                        title="Finish Order"
                        disabled=finished
                        on:click=move |_| state::run_action(state, OrderAction::Finish(id))
                    >
                        {icon("check")}
                    </button>
                    <button
                        class="icon-btn icon-btn--danger"
                        aria-label="Delete Order"
                        title="Delete Order"
                        on:click=move |_| state::run_action(state, OrderAction::Delete(id))
                    >
                        {icon("delete")}
                    </button>
                </td>
            </tr>
            <Show when=is_open>
                <OrderDetailsRow order=details.clone() />
            </Show>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Order Dashboard">
                <NotificationBell
                    count=Signal::derive(move || state.with(|s| s.book.notification_count()))
                    on_click=Callback::new(move |_| state::receive_new_order(state))
                />
            </PageHeader>

            <div class="filter-panel">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v| state::set_search(state, v))
                    placeholder="Search job types or customer names..."
                />
            </div>

            <div class="page-content">
                <table class="table" style="width: 100%;">
                    <thead>
                        <tr>
                            {OrderField::ALL.into_iter().map(header_cell).collect_view()}
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = page.get().items;
                            let filter = search.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan=COLUMN_COUNT class="table__cell table__cell--empty">
                                            "No orders found."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|order| render_row(order, &filter))
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.get().page)
                total_pages=Signal::derive(move || page.get().page_count)
                total_count=Signal::derive(move || page.get().total)
                on_page_change=Callback::new(move |p| state::go_to_page(state, p))
            />
        </div>
    }
}
