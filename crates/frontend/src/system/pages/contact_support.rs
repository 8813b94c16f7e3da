use crate::shared::api_utils::api_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::system::health::HealthResponse;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SUPPORT_EMAIL: &str = "idolmingming@gmail.com";

async fn fetch_health() -> Result<HealthResponse, String> {
    let response = Request::get(&api_url("/api/health"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Health check failed: {}", response.status()));
    }

    response
        .json::<HealthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[component]
pub fn ContactSupportPage() -> impl IntoView {
    let (health, set_health) = signal(Option::<Result<String, String>>::None);

    spawn_local(async move {
        let result = fetch_health().await.map(|h| h.message);
        if let Err(e) = &result {
            log::warn!("{}", e);
        }
        set_health.set(Some(result));
    });

    let report_issue = move |_| {
        if let Some(w) = web_sys::window() {
            if w.open_with_url(&format!("mailto:{}", SUPPORT_EMAIL)).is_err() {
                log::warn!("could not open mail client");
            }
        }
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title="Help and Support" />

            <h2 class="section-title">"Contact Support"</h2>
            <p>"If you need further assistance, feel free to reach out via email:"</p>
            <p class="support-email">{SUPPORT_EMAIL}</p>

            <Button appearance=ButtonAppearance::Primary on_click=report_issue>
                {icon("mail")}
                " Report an Issue"
            </Button>

            <div class="support-status">
                {move || match health.get() {
                    None => view! { <span class="text-muted">"Checking server status…"</span> }.into_any(),
                    Some(Ok(message)) => view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            {message}
                        </Badge>
                    }.into_any(),
                    Some(Err(_)) => view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                            "Server unreachable"
                        </Badge>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
