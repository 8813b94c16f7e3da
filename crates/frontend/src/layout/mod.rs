pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use contracts::system::routing::Route;
use leptos::prelude::*;
use top_header::TopHeader;

/// Admin shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(#[prop(into)] active_route: Signal<Option<Route>>) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader active_route=active_route />
            <div class="app-body">
                <left::Left>
                    <left::sidebar::Sidebar active_route=active_route />
                </left::Left>
                <div class="app-main">
                    <center::Center active_route=active_route />
                </div>
            </div>
        </div>
    }
}
