pub mod registry;

use contracts::system::routing::Route;
use leptos::prelude::*;

#[component]
pub fn Center(#[prop(into)] active_route: Signal<Option<Route>>) -> impl IntoView {
    view! {
        <div data-zone="center" class="center">
            {move || active_route.get().map(registry::render_route)}
        </div>
    }
}
