use crate::layout::global_context::use_global_context;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::usecases::u502_order_form::OrderFormPage;
use contracts::system::routing::{resolve, Resolution, Route};
use leptos::prelude::*;

/// Top-level screen; admin routes share one shell so the sidebar survives
/// navigation between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    OrderForm,
    Admin,
    Redirecting,
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let resolution = Memo::new(move |_| {
        let location = ctx.location.get();
        resolve(&location.path, &location.query, auth.is_logged_in())
    });

    Effect::new(move |_| {
        if let Resolution::Redirect(to) = resolution.get() {
            log::debug!("redirect to {}", to);
            ctx.redirect(to);
        }
    });

    let screen = Memo::new(move |_| match resolution.get() {
        Resolution::Render(Route::Login) => Screen::Login,
        Resolution::Render(Route::OrderForm) => Screen::OrderForm,
        Resolution::Render(_) => Screen::Admin,
        Resolution::Redirect(_) => Screen::Redirecting,
    });

    let active_route = Memo::new(move |_| match resolution.get() {
        Resolution::Render(route) => Some(route),
        Resolution::Redirect(_) => None,
    });

    move || match screen.get() {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::OrderForm => view! { <OrderFormPage /> }.into_any(),
        Screen::Admin => view! { <Shell active_route=active_route /> }.into_any(),
        Screen::Redirecting => ().into_any(),
    }
}
