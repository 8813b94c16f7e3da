use leptos::prelude::*;

/// Native `<input type="date">`; values are `yyyy-mm-dd`, empty when cleared.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    let aria_label = label.clone();
    let has_label = !label.is_empty();

    view! {
        <label class="date-input">
            <Show when=move || has_label>
                <span class="date-input__label">{label.clone()}</span>
            </Show>
            <input
                type="date"
                class="date-input__field"
                aria-label=aria_label
                prop:value=value
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}
