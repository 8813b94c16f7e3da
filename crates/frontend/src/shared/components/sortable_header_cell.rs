//! Clickable table header showing the sort indicator of its column.

use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// " ⇅", " ▲" or " ▼"
    #[prop(into)]
    indicator: Signal<&'static str>,
    on_sort: Callback<()>,
    #[prop(optional, default = "left")] align: &'static str,
) -> impl IntoView {
    let is_active = move || indicator.get().trim() != "⇅";

    view! {
        <th
            class="table__header-cell table__sortable-header"
            style=format!("cursor: pointer; text-align: {};", align)
            on:click=move |_| on_sort.run(())
        >
            {label}
            <span class="sort-icon" class:active=is_active>
                {move || indicator.get()}
            </span>
        </th>
    }
}
