//! Admin navigation: one entry per screen plus logout.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::routing::Route;
use leptos::prelude::*;

#[component]
pub fn Sidebar(#[prop(into)] active_route: Signal<Option<Route>>) -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();

    view! {
        <div class="app-sidebar__content">
            {Route::SIDEBAR
                .into_iter()
                .map(|route| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || active_route.get() == Some(route)
                            style:padding-left="12px"
                            on:click=move |_| ctx.navigate(route.path())
                        >
                            <div class="app-sidebar__item-content">
                                {icon(route.icon())}
                                <span>{route.title()}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <div
                class="app-sidebar__item app-sidebar__item--logout"
                style:padding-left="12px"
                on:click=move |_| {
                    auth.logout();
                    ctx.navigate(Route::Login.path());
                }
            >
                <div class="app-sidebar__item-content">
                    {icon("log-out")}
                    <span>"Logout"</span>
                </div>
            </div>
        </div>
    }
}
