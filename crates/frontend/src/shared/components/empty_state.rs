use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Empty-list placeholder.
///
/// While a search is active the message explains that nothing matched and
/// the create action is hidden.
#[component]
pub fn EmptyState(
    /// Icon name, see [`icon`]
    icon_name: &'static str,
    #[prop(into)]
    title: String,
    /// Shown when no search term is active
    #[prop(into)]
    hint: String,
    /// Shown when the search returned nothing
    #[prop(into)]
    search_hint: String,
    #[prop(into)]
    searching: Signal<bool>,
    /// Label of the create button
    #[prop(into)]
    create_label: String,
    on_create: Callback<()>,
) -> impl IntoView {
    let create_label = StoredValue::new(create_label);
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(icon_name)}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__hint">
                {move || if searching.get() { search_hint.clone() } else { hint.clone() }}
            </p>
            <Show when=move || !searching.get()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_create.run(())
                >
                    {icon("plus")}
                    {format!(" {}", create_label.get_value())}
                </Button>
            </Show>
        </div>
    }
}
