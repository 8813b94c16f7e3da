use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::auth::{Credentials, LOGIN_DELAY_MS};
use contracts::system::routing::Route;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (show_password, set_show_password) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let ctx = use_global_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            TimeoutFuture::new(LOGIN_DELAY_MS).await;
            match auth.login(&credentials) {
                Ok(_) => ctx.navigate(Route::OrderDashboard.path()),
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Login to Admin Panel"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message" role="alert">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter Admin"
                            class:input--empty=move || username.get().is_empty()
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                placeholder="Enter Password"
                                class:input--empty=move || password.get().is_empty()
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                            <button
                                type="button"
                                class="password-field__toggle"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="rememberMe"
                            prop:checked=move || remember_me.get()
                            on:change=move |_| set_remember_me.update(|v| *v = !*v)
                        />
                        <label for="rememberMe">"Remember Me"</label>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() {
                            view! { <span class="spinner"></span> }.into_any()
                        } else {
                            view! { <>{icon("log-in")}" Login"</> }.into_any()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
