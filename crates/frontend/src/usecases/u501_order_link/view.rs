use crate::shared::api_utils::api_base;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::page_header::PageHeader;
use crate::shared::download::download_text;
use crate::shared::icons::icon;
use crate::shared::{confirm, now_millis};
use contracts::usecases::u501_order_link::{
    svg_data_url, OrderLink, OrderLinkState, QR_FILE_NAME, QR_SIZE_PX, REGENERATE_PROMPT,
};
use contracts::usecases::common::UseCaseMetadata;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn QrCodePage() -> impl IntoView {
    let state = RwSignal::new(OrderLinkState::new(&api_base()));

    let image_src = Memo::new(move |_| state.with(|s| s.svg.as_deref().map(svg_data_url)));
    let url = Signal::derive(move || state.with(|s| s.url.clone()));
    let message = Signal::derive(move || state.with(|s| s.message.clone()));

    let on_regenerate = move |_| {
        if !confirm(REGENERATE_PROMPT) {
            return;
        }
        state.update(|s| {
            if let Err(e) = s.regenerate(&api_base(), now_millis()) {
                log::error!("{}: {}", OrderLink::full_name(), e);
            }
        });
    };

    let on_download = move |_| {
        let Some(svg) = state.try_update(|s| s.download()).flatten() else {
            return;
        };
        if let Err(e) = download_text(&svg, "image/svg+xml", QR_FILE_NAME) {
            log::error!("{}: download failed: {}", OrderLink::full_name(), e);
        }
    };

    let on_copy = move |_| {
        copy_to_clipboard_with_callback(&url.get_untracked(), move |ok| {
            state.update(|s| s.copied(ok));
        });
    };

    let size = QR_SIZE_PX.to_string();

    view! {
        <div class="page">
            <PageHeader title=OrderLink::display_name() subtitle="Share this code so customers can open the order form" />
            <div class="page-content">
                <Card>
                    <Flex vertical=true align=FlexAlign::Center gap=FlexGap::Large>
                        {move || match image_src.get() {
                            Some(src) => view! {
                                <img
                                    class="qr-code"
                                    src=src
                                    width=size.clone()
                                    height=size.clone()
                                    alt="Order form QR code"
                                />
                            }
                            .into_any(),
                            None => view! {
                                <div class="qr-code qr-code--empty">"No QR code"</div>
                            }
                            .into_any(),
                        }}

                        <a class="qr-code__link" href=url target="_blank">{url}</a>

                        <Flex gap=FlexGap::Small>
                            <Button appearance=ButtonAppearance::Primary on_click=on_regenerate>
                                {icon("refresh")}
                                " Generate New QR Code"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || image_src.get().is_none())
                                on_click=on_download
                            >
                                {icon("download")}
                                " Download QR Code"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=on_copy>
                                {icon("copy")}
                                " Copy Link"
                            </Button>
                        </Flex>

                        {move || message.get().map(|text| view! {
                            <div class="qr-code__message">{text}</div>
                        })}
                    </Flex>
                </Card>
            </div>
        </div>
    }
}
