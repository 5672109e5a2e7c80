/// Search input shared by the list pages
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search field with debounce and a clear button.
///
/// Keystrokes update the field immediately; `on_change` fires only once the
/// user has paused for `debounce_ms`. Clearing fires at once.
#[component]
pub fn SearchInput(
    /// Term currently applied to the list
    #[prop(into)]
    value: Signal<String>,
    /// Called with the settled term
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional)]
    debounce_ms: Option<u32>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };
    let delay = debounce_ms.unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);

    let (input_value, set_input_value) = signal(value.get_untracked());
    // replacing the stored timeout drops, and thereby cancels, the previous one
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(delay, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    type="button"
                    class="search-input__clear"
                    title="Limpiar búsqueda"
                    on:click=clear
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
