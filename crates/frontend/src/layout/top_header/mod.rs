//! Top bar: sidebar toggle, title of the active screen, signed-in user.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::routing::Route;
use leptos::prelude::*;

#[component]
pub fn TopHeader(#[prop(into)] active_route: Signal<Option<Route>>) -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Print Shop Admin"</span>
                <span class="top-header__section">
                    {move || active_route.get().map(|route| route.title()).unwrap_or_default()}
                </span>
            </div>
            <div class="top-header__actions">
                {move || auth.user_name().map(|name| view! {
                    <span class="top-header__user">{icon("user")}{name}</span>
                })}
            </div>
        </div>
    }
}
