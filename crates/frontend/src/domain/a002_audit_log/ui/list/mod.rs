use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a002_audit_log::aggregate::{sample_audit_log, AuditLogEntry, AuditLogField};
use contracts::domain::a002_audit_log::view::AuditLogQuery;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AuditLogList() -> impl IntoView {
    let entries = StoredValue::new(sample_audit_log());
    let query = RwSignal::new(AuditLogQuery::default());

    let visible = Memo::new(move |_| query.with(|q| entries.with_value(|all| q.apply(all))));
    let search = Signal::derive(move || query.with(|q| q.search.clone()));
    let filters_open = Signal::derive(move || query.with(|q| q.filters_open));

    let header_cell = move |field: AuditLogField| {
        view! {
            <SortableHeaderCell
                label=field.label()
                indicator=Signal::derive(move || query.with(|q| q.sort.indicator(field)))
                on_sort=Callback::new(move |_| query.update(|q| q.toggle_sort(field)))
            />
        }
    };

    let render_row = move |entry: AuditLogEntry, filter: &str| {
        view! {
            <tr class="table__row">
                <td class="table__cell">{highlight_matches(&entry.action, filter)}</td>
                <td class="table__cell">{entry.display_timestamp()}</td>
            </tr>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Audit Log">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| query.update(|q| q.toggle_filters())
                >
                    {icon("filter")}
                    {move || if filters_open.get() { " Hide Filters" } else { " Show Filters" }}
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v: String| query.update(|q| q.search = v))
                    placeholder="Search actions..."
                />
                <Show when=move || filters_open.get()>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <DateInput
                            label="Start Date"
                            value=Signal::derive(move || query.with(|q| q.start_date.clone()))
                            on_change=Callback::new(move |v: String| query.update(|q| q.start_date = v))
                        />
                        <DateInput
                            label="End Date"
                            value=Signal::derive(move || query.with(|q| q.end_date.clone()))
                            on_change=Callback::new(move |v: String| query.update(|q| q.end_date = v))
                        />
                    </Flex>
                </Show>
            </div>

            <div class="page-content">
                <table class="table" style="width: 100%;">
                    <thead>
                        <tr>{AuditLogField::ALL.into_iter().map(header_cell).collect_view()}</tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible.get();
                            let filter = search.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="2" class="table__cell table__cell--empty">
                                            "No audit log entries found."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|entry| render_row(entry, &filter))
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
