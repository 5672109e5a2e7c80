use leptos::prelude::*;

/// Checkbox row of a relationship picker: a title with an optional
/// secondary line underneath
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    /// Secondary text under the label
    #[prop(optional, into)]
    hint: Option<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let wrapper_class = move || {
        if disabled.get() {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };
    let label_for = id.clone();

    view! {
        <div class=wrapper_class>
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=label_for>
                <span class="form__checkbox-title">{label}</span>
                {hint.filter(|h| !h.is_empty()).map(|h| view! {
                    <span class="form__checkbox-hint">{h}</span>
                })}
            </label>
        </div>
    }
}
