//! Route → screen mapping of the admin shell; every admin screen is listed here.

use crate::dashboards::d400_analytics::AnalyticsDashboard;
use crate::domain::a001_order::ui::dashboard::OrderDashboard;
use crate::domain::a002_audit_log::ui::list::AuditLogList;
use crate::domain::a003_print_job::ui::list::ServicesList;
use crate::system::pages::contact_support::ContactSupportPage;
use crate::usecases::u501_order_link::QrCodePage;
use contracts::system::routing::Route;
use leptos::prelude::*;

pub fn render_route(route: Route) -> AnyView {
    match route {
        Route::OrderDashboard => view! { <OrderDashboard /> }.into_any(),
        Route::AnalyticsDashboard => view! { <AnalyticsDashboard /> }.into_any(),
        Route::QrPage => view! { <QrCodePage /> }.into_any(),
        Route::Services => view! { <ServicesList /> }.into_any(),
        Route::AuditLog => view! { <AuditLogList /> }.into_any(),
        Route::ContactSupport => view! { <ContactSupportPage /> }.into_any(),
        // Rendered outside the shell
        Route::Login | Route::OrderForm => ().into_any(),
    }
}
