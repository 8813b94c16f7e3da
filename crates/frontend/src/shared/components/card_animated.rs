//! Thaw [`Card`] that fades in; the `card-appear` keyframes live in the stylesheet.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Delay for a staggered entrance.
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    let full_style = format!(
        "animation: card-appear 0.5s ease-out {}ms both; {}",
        delay_ms, style
    );

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
