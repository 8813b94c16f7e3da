use super::chart::Chart;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use contracts::dashboards::d400_analytics::analytics_charts;
use leptos::prelude::*;

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let charts = analytics_charts()
        .into_iter()
        .enumerate()
        .map(|(i, series)| {
            view! {
                <CardAnimated delay_ms=(i as u32) * 100>
                    <Chart series />
                </CardAnimated>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <PageHeader title="Analytics Dashboard" />
            <div class="page-content analytics-grid">{charts}</div>
        </div>
    }
}
